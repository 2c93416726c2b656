use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::dynamictext::DynamicText;
use crate::components::mapposition::MapPosition;
use crate::components::markers::{Backdrop, Interactable, Player};
use crate::components::rotation::Rotation;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::resources::gameconfig::GameConfig;
use crate::resources::spritestore::SpriteStore;

/// Maps world units (y up) to screen pixels (y down), centred on a focus point.
#[derive(Debug, Clone, Copy)]
pub struct View {
    pub focus: Vector2,
    pub screen_center: Vector2,
    pub pixels_per_unit: f32,
}

impl View {
    pub fn to_screen(&self, world: Vector2) -> Vector2 {
        Vector2 {
            x: self.screen_center.x + (world.x - self.focus.x) * self.pixels_per_unit,
            y: self.screen_center.y - (world.y - self.focus.y) * self.pixels_per_unit,
        }
    }

    pub fn to_pixels(&self, units: f32) -> f32 {
        units * self.pixels_per_unit
    }
}

/// Triangle vertices for an avatar at `center` facing `heading` degrees, in
/// counter-clockwise screen order.
pub fn avatar_triangle(view: &View, center: Vector2, heading: f32, size: f32) -> [Vector2; 3] {
    let h = heading.to_radians();
    let forward = Vector2 { x: -h.sin(), y: h.cos() };
    let right = Vector2 { x: forward.y, y: -forward.x };
    let tip = center + forward.scale_by(size);
    let back = center - forward.scale_by(size * 0.6);
    let left_corner = back - right.scale_by(size * 0.6);
    let right_corner = back + right.scale_by(size * 0.6);
    [
        view.to_screen(tip),
        view.to_screen(left_corner),
        view.to_screen(right_corner),
    ]
}

/// Draw the frame: backdrop, interactables, player, then text.
#[allow(clippy::too_many_arguments, clippy::type_complexity)]
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    config: Res<GameConfig>,
    sprites: Res<SpriteStore>,
    backdrops: Query<&Sprite, With<Backdrop>>,
    objects: Query<
        (&MapPosition, &Sprite, Option<&Rotation>, Option<&DynamicText>),
        With<Interactable>,
    >,
    players: Query<(&MapPosition, &Rotation, &Sprite), With<Player>>,
    texts: Query<(&ScreenPosition, &DynamicText)>,
) {
    let (w, h) = (rl.get_screen_width(), rl.get_screen_height());
    let focus = players
        .single()
        .map(|(pos, ..)| pos.pos)
        .unwrap_or(Vector2::zero());
    let view = View {
        focus,
        screen_center: Vector2 {
            x: w as f32 * 0.5,
            y: h as f32 * 0.5,
        },
        pixels_per_unit: config.window.pixels_per_unit,
    };

    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::BLACK);

    for sprite in backdrops.iter() {
        d.draw_rectangle(0, 0, w, h, sprites.get(&sprite.tex_key));
    }

    for (pos, sprite, rotation, _) in objects.iter() {
        let center = view.to_screen(pos.pos);
        let (sw, sh) = (view.to_pixels(sprite.width), view.to_pixels(sprite.height));
        let degrees = rotation.map(|r| r.degrees).unwrap_or(0.0);
        d.draw_rectangle_pro(
            Rectangle {
                x: center.x,
                y: center.y,
                width: sw,
                height: sh,
            },
            Vector2 {
                x: sw * 0.5,
                y: sh * 0.5,
            },
            // screen rotation is clockwise
            -degrees,
            sprites.get(&sprite.tex_key),
        );
    }

    for (pos, rotation, sprite) in players.iter() {
        let [a, b, c] = avatar_triangle(&view, pos.pos, rotation.degrees, sprite.height * 0.5);
        d.draw_triangle(a, b, c, sprites.get(&sprite.tex_key));
    }

    for (pos, _, _, overlay) in objects.iter() {
        if let Some(text) = overlay.filter(|t| t.visible) {
            let at = view.to_screen(pos.pos);
            d.draw_text(
                &text.content,
                at.x as i32,
                at.y as i32 - text.font_size as i32 * 2,
                text.font_size as i32,
                text.color,
            );
        }
    }

    for (pos, text) in texts.iter() {
        if text.visible {
            d.draw_text(
                &text.content,
                pos.pos.x as i32,
                pos.pos.y as i32,
                text.font_size as i32,
                text.color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> View {
        View {
            focus: Vector2 { x: 1.0, y: 1.0 },
            screen_center: Vector2 { x: 100.0, y: 50.0 },
            pixels_per_unit: 10.0,
        }
    }

    #[test]
    fn focus_maps_to_screen_center() {
        let p = view().to_screen(Vector2 { x: 1.0, y: 1.0 });
        assert_eq!((p.x, p.y), (100.0, 50.0));
    }

    #[test]
    fn world_up_is_screen_down() {
        let p = view().to_screen(Vector2 { x: 2.0, y: 3.0 });
        assert_eq!((p.x, p.y), (110.0, 30.0));
    }

    #[test]
    fn avatar_tip_points_along_heading() {
        let v = view();
        let center = Vector2 { x: 1.0, y: 1.0 };
        // heading 0 faces +y, which is up on screen
        let [tip, ..] = avatar_triangle(&v, center, 0.0, 1.0);
        assert!((tip.x - 100.0).abs() < 1e-4);
        assert!((tip.y - 40.0).abs() < 1e-4);
        // heading -90 faces +x
        let [tip, ..] = avatar_triangle(&v, center, -90.0, 1.0);
        assert!((tip.x - 110.0).abs() < 1e-4);
        assert!((tip.y - 50.0).abs() < 1e-4);
    }
}

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use raylib::prelude::*;
use tracing::{debug, warn};

use crate::constants::*;
use crate::error::ErrorKind;
use crate::markup::Markup;
use crate::registry::SlideshowRegistry;
use crate::target::{Binding, Control, RenderTarget};
use crate::texture_loader::load_texture_with_exif_rotation;

/// A raylib window hosting exactly one widget.
pub struct WindowTarget {
    rl: RaylibHandle,
    thread: RaylibThread,
    widget_id: String,
    texture: Option<Texture2D>,
    image_uri: String,
    counter_text: String,
    bindings: HashMap<Control, Binding>,
}

impl WindowTarget {
    pub fn open(widget_id: &str, title: &str) -> Self {
        let (mut rl, thread) = raylib::init()
            .size(WINDOW_WIDTH, WINDOW_HEIGHT)
            .title(title)
            .vsync()
            .resizable()
            .build();
        rl.set_target_fps(FPS);
        rl.set_trace_log(TraceLogLevel::LOG_ERROR);

        Self {
            rl,
            thread,
            widget_id: widget_id.to_string(),
            texture: None,
            image_uri: String::new(),
            counter_text: String::new(),
            bindings: HashMap::new(),
        }
    }

    /// Event loop: arrow keys and button clicks run the bound controls.
    pub fn run(&mut self, registry: &mut SlideshowRegistry) -> Result<()> {
        while !self.rl.window_should_close() {
            if let Some(control) = self.pressed_control() {
                if let Some(binding) = self.bindings.get(&control).cloned() {
                    registry.dispatch(self, &binding)?;
                }
            }
            self.draw();
        }
        Ok(())
    }

    fn pressed_control(&self) -> Option<Control> {
        if self.rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            return Some(Control::Previous);
        }
        if self.rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            return Some(Control::Next);
        }
        if self.rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let screen = (self.rl.get_screen_width() as f32, self.rl.get_screen_height() as f32);
            return control_at(self.rl.get_mouse_position(), screen.0, screen.1);
        }
        None
    }

    fn draw(&mut self) {
        let sw = self.rl.get_screen_width() as f32;
        let sh = self.rl.get_screen_height() as f32;
        let mouse = self.rl.get_mouse_position();
        let (previous, next) = button_rects(sw, sh);

        let mut d = self.rl.begin_drawing(&self.thread);
        d.clear_background(Color::RAYWHITE);

        match &self.texture {
            Some(texture) => {
                let tex_width = texture.width() as f32;
                let tex_height = texture.height() as f32;
                let dest = image_rect(sw, sh, tex_width, tex_height);
                d.draw_texture_pro(
                    texture,
                    Rectangle::new(0.0, 0.0, tex_width, tex_height),
                    dest,
                    Vector2::zero(),
                    0.0,
                    Color::WHITE,
                );
                d.draw_rectangle_lines_ex(dest, 1.0, Color::LIGHTGRAY);
            }
            None => {
                // Broken image: frame plus the URI that failed
                let area = image_area(sw, sh);
                d.draw_rectangle_lines_ex(area, 1.0, Color::LIGHTGRAY);
                d.draw_text(
                    &self.image_uri,
                    (area.x + MARGIN) as i32,
                    (area.y + MARGIN) as i32,
                    FONT_SIZE,
                    Color::RED,
                );
            }
        }

        for (rect, label) in [(previous, BUTTON_PREVIOUS_LABEL), (next, BUTTON_NEXT_LABEL)] {
            let fill = if rect.check_collision_point_rec(mouse) { Color::LIGHTGRAY } else { Color::WHITE };
            d.draw_rectangle_rec(rect, fill);
            d.draw_rectangle_lines_ex(rect, 2.0, Color::GRAY);
            let label_width = d.measure_text(label, FONT_SIZE) as f32;
            d.draw_text(
                label,
                (rect.x + (rect.width - label_width) / 2.0) as i32,
                (rect.y + (rect.height - FONT_SIZE as f32) / 2.0) as i32,
                FONT_SIZE,
                Color::DARKGRAY,
            );
        }

        let counter_width = d.measure_text(&self.counter_text, FONT_SIZE) as f32;
        d.draw_text(
            &self.counter_text,
            ((sw - counter_width) / 2.0) as i32,
            (previous.y + (previous.height - FONT_SIZE as f32) / 2.0) as i32,
            FONT_SIZE,
            Color::DARKGRAY,
        );
    }
}

impl RenderTarget for WindowTarget {
    fn mount(&mut self, widget_id: &str, markup: &Markup) -> Result<(), ErrorKind> {
        if widget_id != self.widget_id {
            return Err(ErrorKind::MissingContainer(widget_id.to_string()));
        }
        self.bindings.clear();
        self.set_image_source(widget_id, &markup.image_src);
        self.set_counter_text(widget_id, &markup.counter_text);
        Ok(())
    }

    fn set_image_source(&mut self, widget_id: &str, uri: &str) {
        if widget_id != self.widget_id {
            return;
        }
        self.image_uri = uri.to_string();
        self.texture = match load_texture_with_exif_rotation(&mut self.rl, &self.thread, Path::new(uri)) {
            Ok(texture) => {
                debug!(uri, "loaded slide");
                Some(texture)
            }
            Err(e) => {
                warn!("{:#}", e);
                None
            }
        };
    }

    fn set_counter_text(&mut self, widget_id: &str, text: &str) {
        if widget_id == self.widget_id {
            self.counter_text = text.to_string();
        }
    }

    fn bind_control(&mut self, widget_id: &str, binding: Binding) {
        if widget_id == self.widget_id {
            self.bindings.insert(binding.control, binding);
        }
    }
}

// --- Layout ---

/// Space above the control bar where the image is drawn.
fn image_area(screen_width: f32, screen_height: f32) -> Rectangle {
    Rectangle::new(
        MARGIN,
        MARGIN,
        (screen_width - 2.0 * MARGIN).max(0.0),
        (screen_height - CONTROL_BAR_HEIGHT - 2.0 * MARGIN).max(0.0),
    )
}

/// Largest rectangle with the texture's aspect ratio, centered in the image area.
fn image_rect(screen_width: f32, screen_height: f32, tex_width: f32, tex_height: f32) -> Rectangle {
    let area = image_area(screen_width, screen_height);
    if tex_width <= 0.0 || tex_height <= 0.0 {
        return Rectangle::new(area.x, area.y, 0.0, 0.0);
    }
    let scale = (area.width / tex_width).min(area.height / tex_height);
    let width = tex_width * scale;
    let height = tex_height * scale;
    Rectangle::new(
        area.x + (area.width - width) / 2.0,
        area.y + (area.height - height) / 2.0,
        width,
        height,
    )
}

/// Previous and Next buttons, either side of the counter slot.
fn button_rects(screen_width: f32, screen_height: f32) -> (Rectangle, Rectangle) {
    let y = screen_height - CONTROL_BAR_HEIGHT + (CONTROL_BAR_HEIGHT - BUTTON_HEIGHT) / 2.0;
    let center = screen_width / 2.0;
    let previous = Rectangle::new(
        center - COUNTER_WIDTH / 2.0 - COUNTER_GAP - BUTTON_WIDTH,
        y,
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
    );
    let next = Rectangle::new(center + COUNTER_WIDTH / 2.0 + COUNTER_GAP, y, BUTTON_WIDTH, BUTTON_HEIGHT);
    (previous, next)
}

fn control_at(point: Vector2, screen_width: f32, screen_height: f32) -> Option<Control> {
    let (previous, next) = button_rects(screen_width, screen_height);
    if previous.check_collision_point_rec(point) {
        Some(Control::Previous)
    } else if next.check_collision_point_rec(point) {
        Some(Control::Next)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn wide_image_fills_width() {
        let rect = image_rect(960.0, 720.0, 1920.0, 1080.0);
        assert!(close(rect.x, MARGIN));
        assert!(close(rect.width, 960.0 - 2.0 * MARGIN));
        assert!(close(rect.width / rect.height, 1920.0 / 1080.0));
        let area = image_area(960.0, 720.0);
        assert!(close(rect.y - area.y, area.y + area.height - (rect.y + rect.height)));
    }

    #[test]
    fn tall_image_fills_height() {
        let rect = image_rect(960.0, 720.0, 600.0, 1200.0);
        let area = image_area(960.0, 720.0);
        assert!(close(rect.y, area.y));
        assert!(close(rect.height, area.height));
        assert!(close(rect.x + rect.width / 2.0, 480.0));
    }

    #[test]
    fn empty_texture_has_no_area() {
        let rect = image_rect(960.0, 720.0, 0.0, 0.0);
        assert_eq!((rect.width, rect.height), (0.0, 0.0));
    }

    #[test]
    fn clicks_hit_the_right_button() {
        let (previous, next) = button_rects(960.0, 720.0);
        assert!(previous.x + previous.width < next.x);
        assert!(previous.y + previous.height <= 720.0);

        let center = |r: Rectangle| Vector2::new(r.x + r.width / 2.0, r.y + r.height / 2.0);
        assert_eq!(control_at(center(previous), 960.0, 720.0), Some(Control::Previous));
        assert_eq!(control_at(center(next), 960.0, 720.0), Some(Control::Next));
        assert_eq!(control_at(Vector2::new(480.0, 300.0), 960.0, 720.0), None);
        assert_eq!(control_at(Vector2::new(previous.x, previous.y), 960.0, 720.0), Some(Control::Previous));
        assert_eq!(control_at(Vector2::new(next.x + next.width + 1.0, center(next).y), 960.0, 720.0), None);
        // counter slot between the buttons is not clickable
        assert_eq!(control_at(Vector2::new(480.0, center(next).y), 960.0, 720.0), None);
    }
}

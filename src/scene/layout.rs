use crate::foundation::core::{Canvas, Point};
use crate::scene::color::Color;

/// Fixed placement, sizing and copy of every element in the scene.
///
/// Positions are top-left pixel coordinates unless an element is drawn with a centered anchor.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SceneLayout {
    pub canvas: Canvas,
    pub background: Color,

    pub title_text: &'static str,
    pub title_top: f64,
    pub title_size: f64,

    pub email_x: [f64; 2],
    pub email_y: f64,
    pub email_color: Color,
    pub email_label_text: &'static str,
    pub email_label_y: f64,

    pub icon_size: f64,
    pub label_size: f64,

    pub arrow_pos: Point,
    pub arrow_size: f64,
    pub arrow_color: Color,

    pub user_pos: Point,
    pub user_color: Color,
    pub user_label_text: &'static str,
    pub user_label_pos: Point,

    pub warning_pos: Point,
    pub warning_scale: f64,
    pub warning_color: Color,

    pub border_width: f64,
    pub border_opacity: f64,
    pub border_flash_on: Color,
    pub border_flash_off: Color,

    pub heading_text: &'static str,
    pub heading_bottom: f64,
    pub heading_size: f64,
    pub heading_color: Color,
}

impl SceneLayout {
    pub fn for_canvas(canvas: Canvas) -> Self {
        Self {
            canvas,
            background: Color::MIDNIGHT,

            title_text: "Phishing Attack Flow",
            title_top: 50.0,
            title_size: 32.0,

            email_x: [200.0, 300.0],
            email_y: 400.0,
            email_color: Color::CRIMSON,
            email_label_text: "Fake Email",
            email_label_y: 520.0,

            icon_size: 100.0,
            label_size: 16.0,

            arrow_pos: Point::new(550.0, 430.0),
            arrow_size: 80.0,
            arrow_color: Color::WHITE,

            user_pos: Point::new(800.0, 400.0),
            user_color: Color::WHITE,
            user_label_text: "Victim",
            user_label_pos: Point::new(810.0, 520.0),

            warning_pos: Point::new(800.0, 250.0),
            warning_scale: 1.5,
            warning_color: Color::GOLD,

            border_width: 10.0,
            border_opacity: 0.5,
            border_flash_on: Color::RED,
            border_flash_off: Color::WHITE,

            heading_text: "DATA STOLEN",
            heading_bottom: 100.0,
            heading_size: 60.0,
            heading_color: Color::CRIMSON,
        }
    }

    pub fn title_anchor_point(&self) -> Point {
        Point::new(self.canvas.center().x, self.title_top)
    }

    pub fn heading_anchor_point(&self) -> Point {
        Point::new(
            self.canvas.center().x,
            f64::from(self.canvas.height) - self.heading_bottom,
        )
    }
}

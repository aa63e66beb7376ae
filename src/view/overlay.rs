// SPDX-License-Identifier: GPL-3.0-or-later
// src/view/overlay.rs
//
// Selection overlay widget: translates mouse input into pointer events for
// the rectangle selector and draws the selection chrome over the image.

use cosmic::{
    Element, Renderer,
    iced::{
        Color, Length, Point, Rectangle, Size,
        advanced::{
            Clipboard, Layout, Shell, Widget,
            layout::{Limits, Node},
            renderer::{Quad, Renderer as QuadRenderer},
            widget::Tree,
        },
        event::{Event, Status},
        mouse::{self, Button, Cursor},
        window,
    },
};

use crate::app::AppMessage;
use crate::constant::{MIN_GRID_SELECTION, OFFSET_EPSILON, SCALE_EPSILON};
use crate::select::{
    PointerButton, PointerEvent, PointerKind, RangeSelector, Rect, ScaleContext, Vec2,
};

const OVERLAY_COLOR: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.5);
const BORDER_COLOR: Color = Color::WHITE;
const BORDER_WIDTH: f32 = 2.0;
const GRID_COLOR: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.3);
const CROSSHAIR_COLOR: Color = Color::from_rgba(0.5, 0.5, 0.5, 0.25);
const SELECTION_CROSS_COLOR: Color = Color::from_rgba(1.0, 0.92, 0.0, 0.5);

/// How the image is laid out inside the widget bounds.
///
/// Matches the image widget underneath: scaled by an explicit zoom factor or
/// fit to the bounds, then centered on both axes.
#[derive(Debug, Clone, Copy)]
struct DisplayGeometry {
    scale: f32,
    offset_x: f32,
    offset_y: f32,
    width: f32,
    height: f32,
}

impl DisplayGeometry {
    /// The image rectangle in selection space: origin at the image top edge,
    /// horizontally offset by the centering gap.
    fn display_rect(&self) -> Rect {
        Rect::new(self.offset_x, 0.0, self.width, self.height)
    }
}

pub struct SelectionOverlay {
    image_width: u32,
    image_height: u32,
    selector: RangeSelector,
    zoom: Option<f32>,
    ctx: ScaleContext,
    show_grid: bool,
}

impl SelectionOverlay {
    pub fn new(
        image_width: u32,
        image_height: u32,
        selector: &RangeSelector,
        zoom: Option<f32>,
        ctx: ScaleContext,
        show_grid: bool,
    ) -> Self {
        Self {
            image_width,
            image_height,
            selector: selector.clone(),
            zoom,
            ctx,
            show_grid,
        }
    }

    fn geometry(&self, bounds: Rectangle) -> Option<DisplayGeometry> {
        if self.image_width == 0 || self.image_height == 0 {
            return None;
        }
        let iw = self.image_width as f32;
        let ih = self.image_height as f32;

        let scale = self
            .zoom
            .unwrap_or_else(|| (bounds.width / iw).min(bounds.height / ih));
        if !scale.is_finite() || scale <= 0.0 {
            return None;
        }

        let width = iw * scale;
        let height = ih * scale;
        Some(DisplayGeometry {
            scale,
            offset_x: (bounds.width - width) / 2.0,
            offset_y: (bounds.height - height) / 2.0,
            width,
            height,
        })
    }

    /// Widget-local point to selection space (vertical centering removed).
    fn to_selection_space(point: Point, geo: DisplayGeometry) -> Vec2 {
        Vec2::new(point.x, point.y - geo.offset_y)
    }

    fn publish_pointer(
        &self,
        shell: &mut Shell<'_, AppMessage>,
        kind: PointerKind,
        button: PointerButton,
        position: Vec2,
        geo: DisplayGeometry,
    ) {
        shell.publish(AppMessage::SelectionPointer {
            event: PointerEvent::new(kind, button, position),
            display: geo.display_rect(),
        });
    }

    fn draw_crosshair(&self, renderer: &mut Renderer, image: Rectangle) {
        draw_quad(
            renderer,
            Rectangle::new(
                Point::new(image.x, image.y + image.height / 2.0),
                Size::new(image.width, 1.0),
            ),
            CROSSHAIR_COLOR,
        );
        draw_quad(
            renderer,
            Rectangle::new(
                Point::new(image.x + image.width / 2.0, image.y),
                Size::new(1.0, image.height),
            ),
            CROSSHAIR_COLOR,
        );
    }

    fn draw_dim(&self, renderer: &mut Renderer, image: Rectangle, sel: Rectangle) {
        // Top
        if sel.y > image.y {
            draw_quad(
                renderer,
                Rectangle::new(
                    Point::new(image.x, image.y),
                    Size::new(image.width, sel.y - image.y),
                ),
                OVERLAY_COLOR,
            );
        }

        // Bottom
        let sel_bottom = sel.y + sel.height;
        if sel_bottom < image.y + image.height {
            draw_quad(
                renderer,
                Rectangle::new(
                    Point::new(image.x, sel_bottom),
                    Size::new(image.width, image.y + image.height - sel_bottom),
                ),
                OVERLAY_COLOR,
            );
        }

        // Left
        if sel.x > image.x {
            draw_quad(
                renderer,
                Rectangle::new(Point::new(image.x, sel.y), Size::new(sel.x - image.x, sel.height)),
                OVERLAY_COLOR,
            );
        }

        // Right
        let sel_right = sel.x + sel.width;
        if sel_right < image.x + image.width {
            draw_quad(
                renderer,
                Rectangle::new(
                    Point::new(sel_right, sel.y),
                    Size::new(image.x + image.width - sel_right, sel.height),
                ),
                OVERLAY_COLOR,
            );
        }
    }

    fn draw_border(&self, renderer: &mut Renderer, sel: Rectangle) {
        // Top
        draw_quad(
            renderer,
            Rectangle::new(Point::new(sel.x, sel.y), Size::new(sel.width, BORDER_WIDTH)),
            BORDER_COLOR,
        );

        // Bottom
        draw_quad(
            renderer,
            Rectangle::new(
                Point::new(sel.x, sel.y + sel.height - BORDER_WIDTH),
                Size::new(sel.width, BORDER_WIDTH),
            ),
            BORDER_COLOR,
        );

        // Left
        draw_quad(
            renderer,
            Rectangle::new(Point::new(sel.x, sel.y), Size::new(BORDER_WIDTH, sel.height)),
            BORDER_COLOR,
        );

        // Right
        draw_quad(
            renderer,
            Rectangle::new(
                Point::new(sel.x + sel.width - BORDER_WIDTH, sel.y),
                Size::new(BORDER_WIDTH, sel.height),
            ),
            BORDER_COLOR,
        );
    }

    fn draw_selection_cross(&self, renderer: &mut Renderer, sel: Rectangle) {
        draw_quad(
            renderer,
            Rectangle::new(
                Point::new(sel.x, sel.y + sel.height / 2.0),
                Size::new(sel.width, 1.0),
            ),
            SELECTION_CROSS_COLOR,
        );
        draw_quad(
            renderer,
            Rectangle::new(
                Point::new(sel.x + sel.width / 2.0, sel.y),
                Size::new(1.0, sel.height),
            ),
            SELECTION_CROSS_COLOR,
        );
    }

    fn draw_grid(&self, renderer: &mut Renderer, sel: Rectangle) {
        if !self.show_grid || sel.width <= MIN_GRID_SELECTION || sel.height <= MIN_GRID_SELECTION {
            return;
        }

        let third_w = sel.width / 3.0;
        let third_h = sel.height / 3.0;

        for i in 1..3 {
            let line_x = sel.x + third_w * i as f32;
            draw_quad(
                renderer,
                Rectangle::new(Point::new(line_x, sel.y), Size::new(1.0, sel.height)),
                GRID_COLOR,
            );
        }

        for i in 1..3 {
            let line_y = sel.y + third_h * i as f32;
            draw_quad(
                renderer,
                Rectangle::new(Point::new(sel.x, line_y), Size::new(sel.width, 1.0)),
                GRID_COLOR,
            );
        }
    }
}

impl Widget<AppMessage, cosmic::Theme, Renderer> for SelectionOverlay {
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(&self, _tree: &mut Tree, _renderer: &Renderer, limits: &Limits) -> Node {
        Node::new(limits.max())
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut Renderer,
        _theme: &cosmic::Theme,
        _style: &cosmic::iced::advanced::renderer::Style,
        layout: Layout<'_>,
        _cursor: Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let Some(geo) = self.geometry(bounds) else {
            return;
        };

        let image = Rectangle::new(
            Point::new(bounds.x + geo.offset_x, bounds.y + geo.offset_y),
            Size::new(geo.width, geo.height),
        );

        self.draw_crosshair(renderer, image);

        let selection = self.selector.selection();
        if !self.selector.can_draw_selection() || selection.is_empty() {
            return;
        }

        // Selection space back to screen: x already carries the horizontal
        // offset, y needs the vertical centering gap re-applied.
        let sel = Rectangle::new(
            Point::new(bounds.x + selection.x, bounds.y + geo.offset_y + selection.y),
            Size::new(selection.width, selection.height),
        );

        self.draw_dim(renderer, image, sel);
        self.draw_border(renderer, sel);
        self.draw_selection_cross(renderer, sel);
        self.draw_grid(renderer, sel);
    }

    fn on_event(
        &mut self,
        _tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, AppMessage>,
        _viewport: &Rectangle,
    ) -> Status {
        let bounds = layout.bounds();
        let Some(geo) = self.geometry(bounds) else {
            return Status::Ignored;
        };

        match event {
            Event::Window(window::Event::RedrawRequested(_)) => {
                let changed = (geo.scale - self.ctx.image_scale).abs() > SCALE_EPSILON
                    || (geo.offset_x - self.ctx.horizontal_offset).abs() > OFFSET_EPSILON;
                if changed {
                    self.ctx.image_scale = geo.scale;
                    self.ctx.horizontal_offset = geo.offset_x;
                    shell.publish(AppMessage::ViewerStateChanged {
                        scale: geo.scale,
                        offset_x: geo.offset_x,
                    });
                }
            }

            Event::Mouse(mouse::Event::ButtonPressed(btn @ (Button::Left | Button::Right))) => {
                if let Some(pos) = cursor.position_in(bounds) {
                    let button = match btn {
                        Button::Left => PointerButton::Primary,
                        _ => PointerButton::Secondary,
                    };
                    self.publish_pointer(
                        shell,
                        PointerKind::ButtonDown,
                        button,
                        Self::to_selection_space(pos, geo),
                        geo,
                    );
                    return Status::Captured;
                }
            }

            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if self.selector.is_selecting() || self.selector.is_moving() {
                    // Track past the widget edge; the selector clamps into
                    // the display rect itself.
                    if let Some(pos) = cursor.position() {
                        let local = Point::new(pos.x - bounds.x, pos.y - bounds.y);
                        let button = if self.selector.is_moving() {
                            PointerButton::Secondary
                        } else {
                            PointerButton::Primary
                        };
                        self.publish_pointer(
                            shell,
                            PointerKind::Drag,
                            button,
                            Self::to_selection_space(local, geo),
                            geo,
                        );
                        return Status::Captured;
                    }
                }
            }

            Event::Mouse(mouse::Event::ButtonReleased(btn @ (Button::Left | Button::Right))) => {
                if self.selector.is_selecting() || self.selector.is_moving() {
                    let button = match btn {
                        Button::Left => PointerButton::Primary,
                        _ => PointerButton::Secondary,
                    };
                    let position = cursor
                        .position()
                        .map(|pos| {
                            Self::to_selection_space(
                                Point::new(pos.x - bounds.x, pos.y - bounds.y),
                                geo,
                            )
                        })
                        .unwrap_or_default();
                    self.publish_pointer(shell, PointerKind::ButtonUp, button, position, geo);
                    return Status::Captured;
                }
            }

            _ => {}
        }

        Status::Ignored
    }

    fn mouse_interaction(
        &self,
        _tree: &Tree,
        layout: Layout<'_>,
        cursor: Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let bounds = layout.bounds();
        let Some(geo) = self.geometry(bounds) else {
            return mouse::Interaction::None;
        };

        if let Some(pos) = cursor.position_in(bounds) {
            let point = Self::to_selection_space(pos, geo);

            if self.selector.is_moving() {
                return mouse::Interaction::Grabbing;
            }
            if self.selector.can_draw_selection() && self.selector.selection().contains(point) {
                return mouse::Interaction::Grab;
            }
            if geo.display_rect().contains(point) {
                return mouse::Interaction::Crosshair;
            }
        }

        mouse::Interaction::None
    }
}

impl<'a> From<SelectionOverlay> for Element<'a, AppMessage> {
    fn from(widget: SelectionOverlay) -> Self {
        Element::new(widget)
    }
}

fn draw_quad(renderer: &mut Renderer, bounds: Rectangle, color: Color) {
    renderer.fill_quad(
        Quad {
            bounds,
            ..Quad::default()
        },
        color,
    );
}

pub fn selection_overlay<'a>(
    image_width: u32,
    image_height: u32,
    selector: &RangeSelector,
    zoom: Option<f32>,
    ctx: ScaleContext,
    show_grid: bool,
) -> Element<'a, AppMessage> {
    SelectionOverlay::new(image_width, image_height, selector, zoom, ctx, show_grid).into()
}

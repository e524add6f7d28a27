use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::gdk;
use gtk4::glib;
use gtk4::prelude::*;
use tracing::warn;

use crate::game::Color;

use super::hud::update_subtitle;
use super::input::SurfaceTransform;
use super::state::AppState;

pub const CONTENT_MARGIN: i32 = 12;

fn transform_for(area: &gtk::DrawingArea, st: &AppState) -> SurfaceTransform {
    SurfaceTransform::fit(area.width() as f64, area.height() as f64, st.config.surface)
}

/// The table: one drawing area showing the whole game surface, scaled to fit.
pub fn build_table_area(state: &Rc<RefCell<AppState>>) -> gtk::DrawingArea {
    let surface = state.borrow().config.surface;
    let drawing_area = gtk::DrawingArea::builder()
        .hexpand(true)
        .vexpand(true)
        .content_width(surface.w as i32)
        .content_height(surface.h as i32)
        .margin_top(CONTENT_MARGIN)
        .margin_bottom(CONTENT_MARGIN)
        .margin_start(CONTENT_MARGIN)
        .margin_end(CONTENT_MARGIN)
        .build();
    drawing_area.add_css_class("pairs-table");

    let state_draw = state.clone();
    drawing_area.set_draw_func(move |_, cr, width, height| {
        let st = state_draw.borrow();
        let transform = SurfaceTransform::fit(width as f64, height as f64, st.config.surface);

        cr.set_antialias(gtk::cairo::Antialias::Best);
        Color::BLACK.set_source(cr);
        if let Err(err) = cr.paint() {
            warn!(%err, "failed to clear table");
            return;
        }
        transform.apply(cr);
        cr.rectangle(0.0, 0.0, st.config.surface.w, st.config.surface.h);
        cr.clip();

        if let Err(err) = st.game.draw(cr) {
            warn!(%err, "failed to draw table");
        }
    });

    let click = gtk::GestureClick::new();
    click.set_button(gdk::BUTTON_PRIMARY);
    click.connect_pressed({
        let state = state.clone();
        let area = drawing_area.downgrade();
        move |_, _, x, y| {
            let Some(area) = area.upgrade() else {
                return;
            };
            let mut st = state.borrow_mut();
            let (sx, sy) = transform_for(&area, &st).to_surface(x, y);
            st.game.mouse_down(sx, sy);
            area.set_cursor_from_name(Some(st.game.cursor().css_name()));
            update_subtitle(&st);
        }
    });
    drawing_area.add_controller(click);

    let motion = gtk::EventControllerMotion::new();
    motion.connect_motion({
        let state = state.clone();
        let area = drawing_area.downgrade();
        move |_, x, y| {
            let Some(area) = area.upgrade() else {
                return;
            };
            let mut st = state.borrow_mut();
            let (sx, sy) = transform_for(&area, &st).to_surface(x, y);
            st.game.mouse_move(sx, sy);
            area.set_cursor_from_name(Some(st.game.cursor().css_name()));
        }
    });
    drawing_area.add_controller(motion);

    drawing_area.add_tick_callback(|area, _| {
        area.queue_draw();
        glib::ControlFlow::Continue
    });

    drawing_area
}

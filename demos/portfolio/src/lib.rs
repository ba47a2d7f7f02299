// Copyright 2026 the Updraft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Portfolio demo: a single-page site with scroll-driven reveals.
//!
//! Four sections (hero, about, projects, contact) are built from static
//! content and wired to the web backend's building blocks: one [`ScrollLoop`]
//! for the whole page, a [`SectionController`] plus [`DomRevealPresenter`]
//! per section, and [`schedule_reveal`] for the staggered cascade. Fragment
//! routes (`#/about`, ...) toggle section visibility and reset controllers
//! so reveals replay after navigation.
//!
//! Build with: `wasm-pack build --target web demos/portfolio`
//!
//! Then serve `demos/portfolio/` and open `index.html` in a browser.

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

mod content;
mod router;

use alloc::format;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use updraft_backend_web::{
    DomRevealPresenter, RevealPresenter as _, ScrollLoop, ScrollTick, schedule_reveal,
};
use updraft_core::section::{RevealChanges, ScrollInput, SectionConfig, SectionController};
use updraft_core::viewport::Viewport;

use content::{CERTIFICATIONS, EDUCATION, PROFILE, PROJECTS, SOCIAL_LINKS, WORK_HISTORY};
use router::Route;

/// One mounted section: its controller, presenter, and the routes it
/// appears on.
struct Section {
    controller: Rc<RefCell<SectionController>>,
    presenter: Rc<RefCell<DomRevealPresenter>>,
    routes: &'static [Route],
}

impl Section {
    fn is_on(&self, route: Route) -> bool {
        self.routes.contains(&route)
    }
}

struct App {
    sections: Vec<Section>,
    route: Cell<Route>,
}

/// Entry point — called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let window = web_sys::window().expect("no global window");
    let document = window.document().expect("no document");
    let body = document.body().expect("no body");

    style_body(&body)?;
    body.append_child(&build_nav(&document)?)?;

    let container = el(&document, "main")?;
    let s = container.style();
    s.set_property("max-width", "720px")?;
    s.set_property("margin", "0 auto")?;
    s.set_property("padding", "0 24px")?;
    body.append_child(&container)?;

    // One width check at startup picks the motion parameters for every
    // section; a later resize does not re-select them.
    let viewport = updraft_backend_web::viewport();

    let sections = alloc::vec![
        mount(&container, build_hero(&document)?, &viewport, &[Route::Home]),
        mount(
            &container,
            build_about(&document)?,
            &viewport,
            &[Route::Home, Route::About],
        ),
        mount(
            &container,
            build_projects(&document)?,
            &viewport,
            &[Route::Home, Route::Projects],
        ),
        mount(
            &container,
            build_contact(&document)?,
            &viewport,
            &[Route::Home, Route::Contact],
        ),
    ];

    let app = Rc::new(App {
        sections,
        route: Cell::new(Route::default()),
    });

    // Route from the initial hash, then reveal whatever is already on screen.
    let initial = Route::from_hash(&window.location().hash().unwrap_or_default());
    navigate(&app, initial);

    // One passive scroll listener serves every section.
    let app_scroll = Rc::clone(&app);
    let scroll_loop = ScrollLoop::new(move |tick| process_tick(&app_scroll, tick));
    scroll_loop.start();

    let app_nav = Rc::clone(&app);
    let on_hash_change = Closure::<dyn FnMut()>::new(move || {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        navigate(&app_nav, Route::from_hash(&hash));
    });
    window
        .add_event_listener_with_callback("hashchange", on_hash_change.as_ref().unchecked_ref())?;

    // Keep the listeners alive — there is no graceful shutdown on the web.
    core::mem::forget(scroll_loop);
    core::mem::forget(on_hash_change);

    Ok(())
}

/// Runs every active section's state machine for one scroll notification
/// and schedules any resulting cascade.
fn process_tick(app: &Rc<App>, tick: ScrollTick) {
    let route = app.route.get();
    for section in &app.sections {
        if !section.is_on(route) {
            continue;
        }
        let input = ScrollInput {
            offset: tick.offset,
            viewport: tick.viewport,
            section_in_view: section.presenter.borrow().section_in_view(&tick.viewport),
        };
        let changes = {
            let presenter = section.presenter.borrow();
            section
                .controller
                .borrow_mut()
                .handle_scroll(&input, |id| presenter.measure(id))
        };
        section.presenter.borrow_mut().apply(&changes);

        for &reveal in &changes.scheduled {
            let presenter = Rc::clone(&section.presenter);
            schedule_reveal(&section.controller, reveal, move |element, state| {
                presenter.borrow_mut().apply(&RevealChanges {
                    transitions: alloc::vec![(element, state)],
                    scheduled: Vec::new(),
                });
            });
        }
    }
}

/// Switches routes: toggles section visibility, resets every controller
/// (invalidating in-flight timers), scrolls to the top, and replays the
/// reveal for whatever the new route shows above the fold.
fn navigate(app: &Rc<App>, route: Route) {
    app.route.set(route);
    for section in &app.sections {
        let display = if section.is_on(route) { "block" } else { "none" };
        let _ = section
            .presenter
            .borrow()
            .root()
            .style()
            .set_property("display", display);

        let changes = section.controller.borrow_mut().reset();
        section.presenter.borrow_mut().apply(&changes);
    }

    let Some(window) = web_sys::window() else {
        return;
    };
    window.scroll_to_with_x_and_y(0.0, 0.0);

    // No scroll event fires at offset 0, so synthesize one tick; the fresh
    // trackers report Down and the visible sections cascade in.
    process_tick(
        app,
        ScrollTick {
            offset: 0.0,
            timestamp_ms: updraft_backend_web::now_ms(),
            viewport: updraft_backend_web::viewport(),
        },
    );
}

/// A section's root element plus its tracked child blocks, in reveal order.
struct SectionDom {
    root: HtmlElement,
    blocks: Vec<HtmlElement>,
}

/// Appends a built section to the page and wires its controller/presenter.
fn mount(
    container: &HtmlElement,
    dom: SectionDom,
    viewport: &Viewport,
    routes: &'static [Route],
) -> Section {
    let _ = container.append_child(&dom.root);

    let controller = Rc::new(RefCell::new(SectionController::new(
        SectionConfig::for_viewport(viewport),
    )));
    let mut presenter = DomRevealPresenter::new(dom.root, controller.borrow().motion());
    for block in dom.blocks {
        let id = controller.borrow_mut().add_element();
        presenter.register(id, block);
    }

    Section {
        controller,
        presenter: Rc::new(RefCell::new(presenter)),
        routes,
    }
}

// -- DOM construction ---------------------------------------------------------

fn style_body(body: &HtmlElement) -> Result<(), JsValue> {
    let s = body.style();
    s.set_property("margin", "0")?;
    s.set_property("background", "#101018")?;
    s.set_property("color", "#e8e8f0")?;
    s.set_property(
        "font-family",
        "'Inter', system-ui, -apple-system, sans-serif",
    )?;
    s.set_property("line-height", "1.6")?;
    Ok(())
}

fn build_nav(doc: &Document) -> Result<HtmlElement, JsValue> {
    let nav = el(doc, "nav")?;
    let s = nav.style();
    s.set_property("position", "sticky")?;
    s.set_property("top", "0")?;
    s.set_property("display", "flex")?;
    s.set_property("gap", "24px")?;
    s.set_property("padding", "16px 24px")?;
    s.set_property("background", "rgba(16, 16, 24, 0.9)")?;
    s.set_property("backdrop-filter", "blur(8px)")?;
    s.set_property("z-index", "10")?;

    for (label, route) in [
        ("Home", Route::Home),
        ("About", Route::About),
        ("Projects", Route::Projects),
        ("Contact", Route::Contact),
    ] {
        let link = el(doc, "a")?;
        link.set_attribute("href", route.hash())?;
        link.set_text_content(Some(label));
        link.style().set_property("color", "#8ab4f8")?;
        link.style().set_property("text-decoration", "none")?;
        nav.append_child(&link)?;
    }
    Ok(nav)
}

fn build_hero(doc: &Document) -> Result<SectionDom, JsValue> {
    let root = section_root(doc, "80vh")?;

    let name = text_el(doc, "h1", PROFILE.name)?;
    name.style().set_property("font-size", "3rem")?;
    name.style().set_property("margin", "0")?;

    let title = text_el(doc, "h2", PROFILE.title)?;
    title.style().set_property("color", "#8ab4f8")?;
    title.style().set_property("margin", "0")?;

    let tagline = text_el(doc, "p", PROFILE.tagline)?;

    let cta = el(doc, "div")?;
    cta.style().set_property("display", "flex")?;
    cta.style().set_property("gap", "16px")?;
    let email = el(doc, "a")?;
    email.set_attribute("href", &format!("mailto:{}", PROFILE.email))?;
    email.set_text_content(Some("Get in touch"));
    email.style().set_property("color", "#8ab4f8")?;
    cta.append_child(&email)?;
    let resume = el(doc, "a")?;
    resume.set_attribute("href", PROFILE.resume_url)?;
    resume.set_text_content(Some("Résumé"));
    resume.style().set_property("color", "#8ab4f8")?;
    cta.append_child(&resume)?;

    let blocks = alloc::vec![name, title, tagline, cta];
    for block in &blocks {
        root.append_child(block)?;
    }
    Ok(SectionDom { root, blocks })
}

fn build_about(doc: &Document) -> Result<SectionDom, JsValue> {
    let root = section_root(doc, "auto")?;
    let mut blocks = Vec::new();

    blocks.push(heading(doc, "About")?);

    for entry in WORK_HISTORY {
        let card = card(doc)?;
        card.append_child(&text_el(doc, "h3", entry.role)?)?;
        card.append_child(&text_el(
            doc,
            "p",
            &format!("{} · {}", entry.organization, entry.period),
        )?)?;
        card.append_child(&text_el(doc, "p", entry.summary)?)?;
        card.append_child(&tag_row(doc, entry.tags)?)?;
        blocks.push(card);
    }

    let education = card(doc)?;
    education.append_child(&text_el(doc, "h3", "Education")?)?;
    for entry in EDUCATION {
        education.append_child(&text_el(
            doc,
            "p",
            &format!("{} — {}, {}", entry.institution, entry.credential, entry.period),
        )?)?;
    }
    blocks.push(education);

    let certifications = card(doc)?;
    certifications.append_child(&text_el(doc, "h3", "Certifications")?)?;
    for entry in CERTIFICATIONS {
        certifications.append_child(&text_el(
            doc,
            "p",
            &format!("{} · {} ({})", entry.name, entry.issuer, entry.year),
        )?)?;
    }
    blocks.push(certifications);

    append_blocks(&root, &blocks)?;
    Ok(SectionDom { root, blocks })
}

fn build_projects(doc: &Document) -> Result<SectionDom, JsValue> {
    let root = section_root(doc, "auto")?;
    let mut blocks = Vec::new();

    blocks.push(heading(doc, "Projects")?);

    for project in PROJECTS {
        let card = card(doc)?;
        match project.link {
            Some(url) => {
                let link = el(doc, "a")?;
                link.set_attribute("href", url)?;
                link.style().set_property("color", "#8ab4f8")?;
                let title = text_el(doc, "h3", project.title)?;
                link.append_child(&title)?;
                card.append_child(&link)?;
            }
            None => {
                card.append_child(&text_el(doc, "h3", project.title)?)?;
            }
        }
        card.append_child(&text_el(doc, "p", project.description)?)?;
        card.append_child(&tag_row(doc, project.tags)?)?;
        blocks.push(card);
    }

    append_blocks(&root, &blocks)?;
    Ok(SectionDom { root, blocks })
}

fn build_contact(doc: &Document) -> Result<SectionDom, JsValue> {
    let root = section_root(doc, "auto")?;
    let mut blocks = Vec::new();

    blocks.push(heading(doc, "Contact")?);

    let email = el(doc, "a")?;
    email.set_attribute("href", &format!("mailto:{}", PROFILE.email))?;
    email.set_text_content(Some(PROFILE.email));
    email.style().set_property("color", "#8ab4f8")?;
    email.style().set_property("font-size", "1.4rem")?;
    blocks.push(email);

    let links = el(doc, "div")?;
    links.style().set_property("display", "flex")?;
    links.style().set_property("gap", "24px")?;
    for social in SOCIAL_LINKS {
        let link = el(doc, "a")?;
        link.set_attribute("href", social.url)?;
        link.set_text_content(Some(social.label));
        link.style().set_property("color", "#8ab4f8")?;
        links.append_child(&link)?;
    }
    blocks.push(links);

    append_blocks(&root, &blocks)?;
    Ok(SectionDom { root, blocks })
}

// -- Small helpers ------------------------------------------------------------

fn append_blocks(root: &HtmlElement, blocks: &[HtmlElement]) -> Result<(), JsValue> {
    for block in blocks {
        root.append_child(block)?;
    }
    Ok(())
}

fn el(doc: &Document, tag: &str) -> Result<HtmlElement, JsValue> {
    Ok(doc.create_element(tag)?.unchecked_into())
}

fn text_el(doc: &Document, tag: &str, text: &str) -> Result<HtmlElement, JsValue> {
    let e = el(doc, tag)?;
    e.set_text_content(Some(text));
    Ok(e)
}

fn section_root(doc: &Document, min_height: &str) -> Result<HtmlElement, JsValue> {
    let root = el(doc, "section")?;
    let s = root.style();
    s.set_property("min-height", min_height)?;
    s.set_property("padding", "96px 0")?;
    s.set_property("display", "flex")?;
    s.set_property("flex-direction", "column")?;
    s.set_property("gap", "24px")?;
    Ok(root)
}

fn heading(doc: &Document, text: &str) -> Result<HtmlElement, JsValue> {
    let h = text_el(doc, "h2", text)?;
    h.style().set_property("font-size", "2rem")?;
    h.style().set_property("margin", "0")?;
    Ok(h)
}

fn card(doc: &Document) -> Result<HtmlElement, JsValue> {
    let card = el(doc, "div")?;
    let s = card.style();
    s.set_property("background", "#181824")?;
    s.set_property("border-radius", "12px")?;
    s.set_property("padding", "24px")?;
    Ok(card)
}

fn tag_row(doc: &Document, tags: &[&str]) -> Result<HtmlElement, JsValue> {
    let row = el(doc, "div")?;
    row.style().set_property("display", "flex")?;
    row.style().set_property("gap", "8px")?;
    for tag in tags {
        let chip = text_el(doc, "span", tag)?;
        let s = chip.style();
        s.set_property("background", "#24243a")?;
        s.set_property("border-radius", "999px")?;
        s.set_property("padding", "2px 12px")?;
        s.set_property("font-size", "0.85rem")?;
        row.append_child(&chip)?;
    }
    Ok(row)
}

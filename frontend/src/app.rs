//! Application shell: sidebar navigation and the selected page.
//!
//! The page follows the browser path. Clicking a sidebar entry pushes its
//! path onto the history; back/forward fire `popstate` and re-select the
//! page from the new path.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

use common::model::{
    Allotment, Candidate, Certificate, Course, CourseType, Evaluation, Expert, Location, User,
};
use common::navigation::Page;

use crate::components::crud::CrudScreen;
use crate::components::dashboard::Dashboard;

pub enum Msg {
    Navigate(Page),
    LocationChanged,
}

pub struct App {
    page: Page,
    popstate: Option<Closure<dyn Fn()>>,
}

fn current_page() -> Page {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .map(|path| Page::from_path(&path))
        .unwrap_or_default()
}

fn push_path(page: Page) {
    let pushed = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))
        .and_then(|window| window.history())
        .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(page.path())));
    if let Err(err) = pushed {
        gloo_console::error!("Error updating history:", err);
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let closure = Closure::<dyn Fn()>::new(move || link.send_message(Msg::LocationChanged));
        let popstate = web_sys::window().and_then(|window| {
            window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
                .ok()
                .map(|()| closure)
        });

        Self {
            page: current_page(),
            popstate,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let page = match msg {
            Msg::Navigate(page) => {
                if page != self.page {
                    push_path(page);
                }
                page
            }
            Msg::LocationChanged => current_page(),
        };
        let changed = page != self.page;
        self.page = page;
        changed
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="layout">
                <nav class="sidebar">
                    <div class="brand">{ "TMS" }</div>
                    <ul class="nav">
                        { for Page::ALL.iter().map(|&page| {
                            let onclick = link.callback(move |e: MouseEvent| {
                                e.prevent_default();
                                Msg::Navigate(page)
                            });
                            let class = classes!("nav-link", (page == self.page).then_some("active"));
                            html! {
                                <li><a href={page.path()} {class} {onclick}>{ page.label() }</a></li>
                            }
                        }) }
                    </ul>
                </nav>
                <main class="content">{ self.page_view() }</main>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(window), Some(closure)) = (web_sys::window(), self.popstate.take()) {
            window
                .remove_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
                .ok();
        }
    }
}

impl App {
    fn page_view(&self) -> Html {
        match self.page {
            Page::Dashboard => html! { <Dashboard /> },
            Page::Locations => html! { <CrudScreen<Location> /> },
            Page::Candidates => html! { <CrudScreen<Candidate> /> },
            Page::CourseTypes => html! { <CrudScreen<CourseType> /> },
            Page::Courses => html! { <CrudScreen<Course> /> },
            Page::Allotments => html! { <CrudScreen<Allotment> /> },
            Page::Experts => html! { <CrudScreen<Expert> /> },
            Page::Evaluations => html! { <CrudScreen<Evaluation> /> },
            Page::Users => html! { <CrudScreen<User> /> },
            Page::Certificates => html! { <CrudScreen<Certificate> /> },
        }
    }
}

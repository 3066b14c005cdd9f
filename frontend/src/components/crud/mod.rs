//! Generic CRUD screen: one Yew component serving every management page.
//!
//! The component is parameterised by a [`ScreenEntity`], which supplies the
//! form inputs, table cells, lookups and optional import/download actions.
//! State transitions live in [`common::screen::ScreenState`]; this module
//! wires them to the gateway and the DOM.

use yew::prelude::*;

mod entity;
pub mod fields;
mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use entity::{Import, ScreenEntity};
pub use messages::Msg;
pub use state::CrudScreen;

impl<S: ScreenEntity> Component for CrudScreen<S> {
    type Message = Msg<S>;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        CrudScreen::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Fetch);
            update::load_lookups(ctx);
        }
    }
}

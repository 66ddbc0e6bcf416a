//! Role gate wrapped around every signed-in route.
//!
//! DESIGN
//! ======
//! The decision itself is [`crate::util::guard::decide`]; this component only
//! maps it onto a placeholder, a router redirect or the children.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::net::types::Role;
use crate::state::auth::use_auth;
use crate::util::guard::{GuardDecision, decide};

#[component]
pub fn ProtectedRoute(
    /// Roles admitted to the route. Empty admits any signed-in role.
    #[prop(optional)]
    roles: Vec<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let decision = Memo::new(move |_| auth.state.with(|s| decide(s, &roles)));

    move || match decision.get() {
        GuardDecision::Pending => view! { <div class="page page--loading">"Loading..."</div> }.into_any(),
        GuardDecision::RedirectTo(path) => view! { <Redirect path=path/> }.into_any(),
        GuardDecision::Allow => children().into_any(),
    }
}

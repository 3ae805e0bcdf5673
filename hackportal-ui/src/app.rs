//! App Root Component
//!
//! Picks the page named by the shell.

use leptos::*;

use crate::pages::{DashboardPage, HomePage};
use crate::props::Boot;

/// Root application component
#[component]
pub fn App(boot: Boot) -> impl IntoView {
    match boot {
        Boot::Home(props) => view! { <HomePage props=props /> }.into_view(),
        Boot::Dashboard(props) => view! { <DashboardPage props=props /> }.into_view(),
    }
}

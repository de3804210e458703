//! Header Component
//!
//! Brand link plus the page and account links for the current route.

use leptos::*;
use leptos_router::*;

use trip_planner::routes::{AppRoute, NavItem, NavTarget, Navigation};

use crate::state::use_global_state;

/// Navigation header component
#[component]
pub fn Header() -> impl IntoView {
    let state = use_global_state();
    let location = use_location();

    let navigation = create_memo(move |_| {
        let current = AppRoute::parse(&location.pathname.get()).unwrap_or(AppRoute::Home);
        Navigation::for_page(current, state.is_logged_in())
    });

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center space-x-6">
                        // Logo and brand
                        <A href="/" class="flex items-center space-x-3">
                            <span class="text-2xl">"✈️"</span>
                            <span class="text-xl font-bold text-white">"Trip Planner"</span>
                        </A>

                        <div class="flex items-center space-x-1">
                            {move || navigation.get().pages.into_iter()
                                .map(|item| view! { <NavLink item=item /> })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="flex items-center space-x-1">
                        {move || navigation.get().user.into_iter()
                            .map(|item| view! { <NavLink item=item /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(item: NavItem) -> impl IntoView {
    let class = if item.selected {
        "px-4 py-2 rounded-lg bg-gray-700 text-white"
    } else {
        "px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
    };

    match item.target {
        NavTarget::Route(route) => view! {
            <A href=route.path() class=class>
                {item.name}
            </A>
        }
        .into_view(),
        NavTarget::LogOut => {
            let state = use_global_state();
            let navigate = use_navigate();
            let href = item.href();
            let on_click = move |_| {
                state.log_out();
                navigate(&href, Default::default());
            };

            view! {
                <button type="button" class=class on:click=on_click>
                    {item.name}
                </button>
            }
            .into_view()
        }
    }
}

//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use trip_planner::routes::path_requires_session;

use crate::components::{Layout, Toast};
use crate::pages::{CreateTrip, FavoriteTrips, Home, Login, Signup, TripPage};
use crate::state::{provide_global_state, use_global_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <Layout>
                <RequireSession>
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/login" view=Login />
                        <Route path="/signup" view=Signup />
                        <Route path="/create-trip" view=CreateTrip />
                        <Route path="/favorite-trips" view=FavoriteTrips />
                        <Route path="/trip/:id" view=TripPage />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </RequireSession>
            </Layout>

            // Toast notifications
            <Toast />
        </Router>
    }
}

/// Sends the user to login when the current page needs a session they don't have
#[component]
fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let state = use_global_state();
    let location = use_location();

    let blocked = create_memo(move |_| {
        path_requires_session(&location.pathname.get()) && !state.is_logged_in()
    });

    move || {
        if blocked.get() {
            view! { <Redirect path="/login" /> }.into_view()
        } else {
            children().into_view()
        }
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to My Trips"
            </A>
        </div>
    }
}

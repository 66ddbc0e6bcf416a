//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::protected_route::ProtectedRoute;
use crate::components::toast_host::ToastHost;
use crate::config::ApiConfig;
use crate::net::types::Role;
use crate::pages::admin_dashboard::AdminDashboardPage;
use crate::pages::auth_forms::{ForgotPasswordPage, RegisterPage, ResetPasswordPage, TechnicianRegisterPage, VerifyEmailPage};
use crate::pages::home::HomePage;
use crate::pages::legal::{NotFoundPage, PrivacyPage, TermsPage};
use crate::pages::login::LoginPage;
use crate::pages::new_request::NewRequestPage;
use crate::pages::notifications::NotificationsPage;
use crate::pages::profile::ProfilePage;
use crate::pages::request_detail::RequestDetailPage;
use crate::pages::subscriptions::SubscriptionsPage;
use crate::pages::technician_dashboard::TechnicianDashboardPage;
use crate::pages::technician_job::TechnicianJobPage;
use crate::pages::user_dashboard::UserDashboardPage;
use crate::state::auth::AuthContext;
use crate::state::session::SessionStore;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and toast contexts and sets up client-side routing.
/// The stored session is only read once mounted in the browser, so every
/// protected route renders its loading placeholder on the server.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthContext::new(SessionStore::browser(), ApiConfig::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth.clone());
    provide_context(toasts);

    Effect::new(move || auth.initialize());

    view! {
        <Stylesheet id="leptos" href="/pkg/electrocare.css"/>
        <Title text="ElectroCare"/>

        <Router>
            <Navbar/>
            <ToastHost/>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=(StaticSegment("technician"), StaticSegment("register")) view=TechnicianRegisterPage/>
                <Route path=StaticSegment("verify-email") view=VerifyEmailPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route path=(StaticSegment("reset-password"), ParamSegment("token")) view=ResetPasswordPage/>
                <Route path=StaticSegment("terms") view=TermsPage/>
                <Route path=StaticSegment("privacy") view=PrivacyPage/>

                <Route
                    path=(StaticSegment("user"), StaticSegment("dashboard"))
                    view=|| view! { <ProtectedRoute roles=vec![Role::User]><UserDashboardPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("user"), StaticSegment("requests"), StaticSegment("new"))
                    view=|| view! { <ProtectedRoute roles=vec![Role::User]><NewRequestPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("user"), StaticSegment("requests"), ParamSegment("id"))
                    view=|| view! { <ProtectedRoute roles=vec![Role::User]><RequestDetailPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("user"), StaticSegment("profile"))
                    view=|| view! { <ProtectedRoute roles=vec![Role::User]><ProfilePage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("user"), StaticSegment("subscriptions"))
                    view=|| view! { <ProtectedRoute roles=vec![Role::User]><SubscriptionsPage/></ProtectedRoute> }
                />

                <Route
                    path=(StaticSegment("technician"), StaticSegment("dashboard"))
                    view=|| view! { <ProtectedRoute roles=vec![Role::Technician]><TechnicianDashboardPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("technician"), StaticSegment("jobs"), ParamSegment("id"))
                    view=|| view! { <ProtectedRoute roles=vec![Role::Technician]><TechnicianJobPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("technician"), StaticSegment("profile"))
                    view=|| view! { <ProtectedRoute roles=vec![Role::Technician]><ProfilePage/></ProtectedRoute> }
                />

                <Route
                    path=(StaticSegment("admin"), StaticSegment("dashboard"))
                    view=|| view! { <ProtectedRoute roles=vec![Role::Admin]><AdminDashboardPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("notifications")
                    view=|| view! { <ProtectedRoute><NotificationsPage/></ProtectedRoute> }
                />
            </Routes>
        </Router>
    }
}

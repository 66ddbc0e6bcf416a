//! Static terms and privacy pages.

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <Title text="Terms of Service · ElectroCare"/>
        <main class="page legal">
            <h1>"Terms of Service"</h1>
            <p>"ElectroCare connects customers with independent repair technicians."</p>
            <h2>"Bookings"</h2>
            <p>"Work begins only after the customer approves the technician's estimate."</p>
            <h2>"Payments"</h2>
            <p>"The final cost is settled directly with the technician once the job is complete."</p>
            <h2>"Accounts"</h2>
            <p>"Accounts that abuse the platform may be blocked by administrators."</p>
        </main>
    }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <Title text="Privacy Policy · ElectroCare"/>
        <main class="page legal">
            <h1>"Privacy Policy"</h1>
            <p>"We store your contact details and service history to fulfil repair requests."</p>
            <h2>"Sharing"</h2>
            <p>"Your name, phone and address are shared with the technician assigned to your request."</p>
            <h2>"Your data"</h2>
            <p>"You can update your profile at any time from the profile page."</p>
        </main>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="page not-found">
            <h1>"Page not found"</h1>
            <a href="/">"Back to home"</a>
        </main>
    }
}

use deal_runtime::{DealDashboard, DealProvider};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Northway Fleet Operations" />
        <Meta name="description" content="Deal dashboard for the Northway fleet operations opportunity." />

        <Router>
            <Routes>
                <Route path="" view=DealEntry />
                <Route path="/*any" view=UnknownRoute />
            </Routes>
        </Router>
    }
}

#[component]
pub fn DealEntry() -> impl IntoView {
    view! {
        <DealProvider>
            <DealDashboard />
        </DealProvider>
    }
}

#[component]
fn UnknownRoute() -> impl IntoView {
    view! {
        <section class="empty-state">
            <h1>"Page not found"</h1>
            <A href="/">"Back to the deal"</A>
        </section>
    }
}

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{DataProvider, SiteFooter};
use crate::pages::{ArticleDetail, ArticlesPage, HomePage, NotFound, ProductsPage};

/// Root application component: router, data provider, then the page routes.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <DataProvider>
                <main class="app">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/products") view=ProductsPage />
                        <Route path=path!("/products/*any") view=ProductsPage />
                        <Route path=path!("/articles") view=ArticlesPage />
                        <Route path=path!("/articles/:slug") view=ArticleDetail />
                    </Routes>
                </main>
                <SiteFooter />
            </DataProvider>
        </Router>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod contact {
    pub mod client;
    pub mod error;
    pub mod form;
}
mod components {
    pub mod reveal;
}
mod pages {
    pub mod contact;
    pub mod team;
}

use pages::{
    contact::ContactPage,
    team::TeamPage,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/contact")]
    Contact,
    #[at("/team")]
    Team,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Redirect<Route> to={Route::Contact} /> },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage /> }
        },
        Route::Team => {
            info!("Rendering Team page");
            html! { <TeamPage /> }
        },
        Route::NotFound => html! {
            <section class="page-hero">
                <h1>{"Page not found"}</h1>
                <p>
                    <Link<Route> to={Route::Contact} classes="nav-link">
                        {"Back to Contact"}
                    </Link<Route>>
                </p>
            </section>
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Contact} classes="nav-logo">
                    {"G-Logistics"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Team} classes="nav-link">
                            {"Team"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Contact} classes="nav-link">
                            {"Contact"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{SHELL_STYLES}</style>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

const SHELL_STYLES: &str = r#"
* { box-sizing: border-box; }
body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    color: #111827;
    background: #fff;
}
.top-nav {
    position: sticky;
    top: 0;
    z-index: 100;
    background: rgba(17, 24, 39, 0.95);
    backdrop-filter: blur(10px);
}
.nav-content {
    max-width: 1200px;
    margin: 0 auto;
    padding: 1rem 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-logo {
    color: #34d399;
    font-size: 1.5rem;
    font-weight: 700;
    text-decoration: none;
}
.nav-right {
    display: flex;
    gap: 1.5rem;
}
.nav-link {
    color: #e5e7eb;
    text-decoration: none;
    transition: color 0.3s ease;
}
.nav-link:hover { color: #34d399; }
.burger-menu {
    display: none;
    flex-direction: column;
    gap: 4px;
    background: none;
    border: none;
    cursor: pointer;
}
.burger-menu span {
    width: 24px;
    height: 2px;
    background: #e5e7eb;
}
.page-hero {
    position: relative;
    background: #111827;
    color: #fff;
    padding: 6rem 1.5rem;
    text-align: center;
}
.page-hero::before {
    content: '';
    position: absolute;
    inset: 0;
    background: linear-gradient(to right, rgba(5, 150, 105, 0.2), rgba(37, 99, 235, 0.2));
    pointer-events: none;
}
.page-hero h1 { font-size: 3.75rem; margin-bottom: 1.5rem; }
.page-hero p { font-size: 1.5rem; color: #d1d5db; max-width: 48rem; margin: 0 auto; }
.accent { color: #34d399; }
.section-heading {
    text-align: center;
    margin-bottom: 4rem;
}
.section-heading h2 { font-size: 2.25rem; margin-bottom: 1rem; }
.section-heading p { font-size: 1.25rem; color: #4b5563; }
.reveal {
    opacity: 0;
    transition: opacity 0.8s ease-out, transform 0.8s ease-out;
}
.reveal-rise { transform: translateY(20px); }
.reveal-left { transform: translateX(-20px); }
.reveal-right { transform: translateX(20px); }
.reveal-grow { transform: scale(0.9); }
.reveal.revealed {
    opacity: 1;
    transform: none;
}
@media (max-width: 768px) {
    .burger-menu { display: flex; }
    .nav-right { display: none; }
    .nav-right.mobile-menu-open {
        display: flex;
        flex-direction: column;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        padding: 1rem 1.5rem;
        background: rgba(17, 24, 39, 0.98);
    }
    .page-hero h1 { font-size: 2.25rem; }
    .page-hero p { font-size: 1.25rem; }
}
"#;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

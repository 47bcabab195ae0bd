use crate::{config::ConsoleConfig, pages::Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let navigator = use_navigator().unwrap();
    let config = use_context::<ConsoleConfig>().unwrap();

    let home_onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        navigator.push(&Route::Home);
    });

    html! {
        <nav class="navbar is-primary" role="navigation" aria-label="main navigation">
            <div class="navbar-brand">
                <a class="navbar-item has-text-weight-bold" onclick={home_onclick}>
                    <span class="icon-text">
                        <span class="icon">
                            <ion-icon name="swap-horizontal"></ion-icon>
                        </span>
                        <span>{"portfw"}</span>
                    </span>
                </a>
            </div>
            <div class="navbar-end">
                <span class="navbar-item is-family-monospace">
                    {config.api_endpoint.to_string()}
                </span>
            </div>
        </nav>
    }
}

use crate::{
    api::RouteClient,
    components::navbar::Navbar,
    config::ConsoleConfig,
    controller::RouteController,
    http::FetchTransport,
    pages::{switch, Route},
    state::{ConsoleState, StateHandle},
};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

pub type ConsoleController = RouteController<FetchTransport, Dispatch<ConsoleState>>;

impl StateHandle for Dispatch<ConsoleState> {
    fn reduce<F>(&self, f: F)
    where
        F: FnOnce(&mut ConsoleState),
    {
        self.reduce_mut(f);
    }
}

#[hook]
pub fn use_controller() -> ConsoleController {
    let config = use_context::<ConsoleConfig>().unwrap();
    let dispatch = use_dispatch::<ConsoleState>();
    let client = RouteClient::new(config.api_endpoint, FetchTransport);
    RouteController::new(client, dispatch)
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub config: ConsoleConfig,
}

#[function_component(App)]
pub fn app(props: &Props) -> Html {
    html! {
        <ContextProvider<ConsoleConfig> context={props.config.clone()}>
            <BrowserRouter>
                <Navbar />
                <section class="section">
                    <div class="container">
                        <Switch<Route> render={switch} />
                    </div>
                </section>
            </BrowserRouter>
        </ContextProvider<ConsoleConfig>>
    }
}

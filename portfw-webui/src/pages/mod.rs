use yew::prelude::*;
use yew_router::prelude::*;

mod route_list;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <route_list::RouteList /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home}/> },
    }
}

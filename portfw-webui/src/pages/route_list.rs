use crate::{
    app::use_controller,
    components::{notice::Notice, route_form::RouteForm},
    state::ConsoleState,
};
use yew::prelude::*;
use yewdux::prelude::*;

#[function_component(RouteList)]
pub fn route_list() -> Html {
    let (state, _) = use_store::<ConsoleState>();
    let controller = use_controller();

    let controller_cloned = controller.clone();
    use_effect_with((), move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            let _ = controller_cloned.reload().await;
        });
    });

    let loading = state.is_loading();
    let list = state.routes.current().to_vec();

    let controller_cloned = controller.clone();
    let add_onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if !loading {
            controller_cloned.begin_add();
        }
    });

    let controller_cloned = controller.clone();
    let reload_onclick = Callback::from(move |_: MouseEvent| {
        let controller = controller_cloned.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let _ = controller.reload().await;
        });
    });

    let notice = state.notice.clone().map(|message| {
        let controller = controller.clone();
        let ondismiss = Callback::from(move |_: ()| controller.dismiss_notice());
        html! { <Notice {message} {ondismiss} /> }
    });

    let dialog = state.dialog.form().cloned().map(|form| {
        let controller_cloned = controller.clone();
        let onlocal = Callback::from(move |value: String| controller_cloned.set_local(&value));
        let controller_cloned = controller.clone();
        let ontarget = Callback::from(move |value: String| controller_cloned.set_target(&value));
        let controller_cloned = controller.clone();
        let oncancel = Callback::from(move |_: ()| controller_cloned.cancel());
        let controller_cloned = controller.clone();
        let onsubmit = Callback::from(move |_: ()| {
            if let Some(task) = controller_cloned.submit_form() {
                wasm_bindgen_futures::spawn_local(async move {
                    let _ = task.await;
                });
            }
        });
        html! { <RouteForm {form} {onlocal} {ontarget} {oncancel} {onsubmit} /> }
    });

    html! {
        <>
            { for notice }
            <div class="card">
                <header class="card-header">
                    <p class="card-header-title">
                        {"Routes"}
                        if state.routes.is_loaded() {
                            <span class="tag is-light ml-2">{state.routes.len()}</span>
                        }
                    </p>
                    <div class="card-header-icon buttons mb-0">
                        <button type="button" class="button is-small" disabled={loading} onclick={reload_onclick}>
                            <span class="icon is-small">
                                <ion-icon name="refresh"></ion-icon>
                            </span>
                        </button>
                    </div>
                </header>
                if loading {
                    <progress class="progress is-small is-primary mb-0" max="100"></progress>
                }
                if state.routes.is_empty() {
                    <div class="hero has-text-centered">
                        <div class="hero-body">
                            <p class="title has-text-grey-lighter">
                                { if state.routes.is_loaded() { "No Routes" } else { "Loading" } }
                            </p>
                        </div>
                    </div>
                } else {
                    <table class="table is-fullwidth is-hoverable">
                        <thead>
                            <tr>
                                <th>{"Local"}</th>
                                <th>{"Target"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                        { list.into_iter().map(|entry| {
                            let controller_cloned = controller.clone();
                            let local = entry.local.clone();
                            let target = entry.target.clone();
                            let edit_onclick = Callback::from(move |_: MouseEvent| {
                                controller_cloned.begin_edit(&local, &target);
                            });

                            let controller_cloned = controller.clone();
                            let local = entry.local.clone();
                            let delete_onclick = Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                if gloo_dialogs::confirm(&format!("Are you sure to delete {local}?")) {
                                    let task = controller_cloned.delete_entry(&local);
                                    wasm_bindgen_futures::spawn_local(async move {
                                        let _ = task.await;
                                    });
                                }
                            });

                            html! {
                                <tr key={entry.local.clone()}>
                                    <td class="is-family-monospace">{&entry.local}</td>
                                    <td class="is-family-monospace">{&entry.target}</td>
                                    <td>
                                        <div class="buttons is-right">
                                            <button type="button" class="button is-small" disabled={loading} onclick={edit_onclick}>
                                                <span class="icon is-small">
                                                    <ion-icon name="settings"></ion-icon>
                                                </span>
                                            </button>
                                            <button type="button" class="button is-small is-danger is-light" disabled={loading} onclick={delete_onclick}>
                                                <span class="icon is-small">
                                                    <ion-icon name="trash"></ion-icon>
                                                </span>
                                            </button>
                                        </div>
                                    </td>
                                </tr>
                            }
                        }).collect::<Html>() }
                        </tbody>
                    </table>
                }
                <footer class="card-footer">
                    <a class={classes!("card-footer-item", loading.then_some("has-text-grey-light"))} onclick={add_onclick}>
                        <span class="icon-text">
                            <span class="icon">
                                <ion-icon name="add"></ion-icon>
                            </span>
                            <span>{"New Route"}</span>
                        </span>
                    </a>
                </footer>
            </div>
            { for dialog }
        </>
    }
}

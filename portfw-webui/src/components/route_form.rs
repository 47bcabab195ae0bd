use crate::state::FormState;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub form: FormState,
    pub onlocal: Callback<String>,
    pub ontarget: Callback<String>,
    pub oncancel: Callback<()>,
    pub onsubmit: Callback<()>,
}

/// Modal dialog shared by the create and update flows.
#[function_component(RouteForm)]
pub fn route_form(props: &Props) -> Html {
    let form = &props.form;
    let is_add = form.is_add();

    let onlocal = props.onlocal.clone();
    let local_oninput = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        onlocal.emit(input.value());
    });

    let ontarget = props.ontarget.clone();
    let target_oninput = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        ontarget.emit(input.value());
    });

    let oncancel = props.oncancel.clone();
    let cancel_onclick = Callback::from(move |_: MouseEvent| oncancel.emit(()));

    let onsubmit = props.onsubmit.clone();
    let form_onsubmit = Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        onsubmit.emit(());
    });

    let title = if is_add { "New Route" } else { "Edit Route" };
    let action = if is_add { "Create" } else { "Update" };

    html! {
        <div class="modal is-active">
            <div class="modal-background" onclick={cancel_onclick.clone()}></div>
            <form class="modal-card" onsubmit={form_onsubmit}>
                <header class="modal-card-head">
                    <p class="modal-card-title">{title}</p>
                    <button type="button" class="delete" aria-label="close" onclick={cancel_onclick.clone()}></button>
                </header>
                <section class="modal-card-body">
                    <div class="field">
                        <label class="label">{"Local"}</label>
                        <div class="control">
                            <input class="input" type="text" placeholder="8080"
                                value={form.local.clone()}
                                readonly={!is_add}
                                oninput={local_oninput} />
                        </div>
                    </div>
                    <div class="field">
                        <label class="label">{"Target"}</label>
                        <div class="control">
                            <input class="input" type="text" placeholder="example.com:80"
                                value={form.target.clone()}
                                oninput={target_oninput} />
                        </div>
                    </div>
                </section>
                <footer class="modal-card-foot is-justify-content-flex-end">
                    <button type="button" class="button is-light" onclick={cancel_onclick}>
                        {"Cancel"}
                    </button>
                    <button type="submit" class="button is-primary" disabled={!form.is_complete()}>
                        {action}
                    </button>
                </footer>
            </form>
        </div>
    }
}

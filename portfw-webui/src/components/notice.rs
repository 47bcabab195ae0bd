use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub message: String,
    pub ondismiss: Callback<()>,
}

#[function_component(Notice)]
pub fn notice(props: &Props) -> Html {
    let ondismiss = props.ondismiss.clone();
    let onclick = Callback::from(move |_: MouseEvent| ondismiss.emit(()));

    html! {
        <div class="notification is-danger is-light">
            <button type="button" class="delete" {onclick}></button>
            {&props.message}
        </div>
    }
}

use yew::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <code style="color: red;">{"NOT FOUND"}</code>
    }
}

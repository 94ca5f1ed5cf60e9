use yew::prelude::*;

use crate::components::fade_in::FadeIn;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub paragraphs: Vec<String>,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    html! {
        <FadeIn id="about" class="section section-alt">
            <div class="container centered">
                <h2 class="section-title">{"About Me"}</h2>
                { for props.paragraphs.iter().map(|p| html! { <p class="lead">{ p }</p> }) }
            </div>
        </FadeIn>
    }
}

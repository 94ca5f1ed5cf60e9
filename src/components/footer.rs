use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub owner: AttrValue,
    pub year: u16,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="site-footer">
            <p>{ format!("© {} {}. All rights reserved.", props.year, props.owner) }</p>
        </footer>
    }
}

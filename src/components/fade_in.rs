use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    /// Length of the opacity transition once mounted.
    #[prop_or(1000)]
    pub duration_ms: u32,
    #[prop_or_default]
    pub children: Html,
}

/// A `<section>` that starts transparent and fades in after mount.
#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with((), move |_| {
            // Flip on the next tick so the browser paints opacity 0 first.
            let timeout = Timeout::new(0, move || visible.set(true));
            move || drop(timeout)
        });
    }

    let style = format!(
        "opacity: {}; transition: opacity {}ms ease-out;",
        if *visible { 1 } else { 0 },
        props.duration_ms
    );

    html! {
        <section id={props.id.clone()} class={props.class.clone()} {style}>
            { props.children.clone() }
        </section>
    }
}

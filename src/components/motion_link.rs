use std::rc::Rc;
use yew::prelude::*;

/// Pointer state of an element that scales on hover and press.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub struct Gesture {
    hovered: bool,
    pressed: bool,
}

pub enum GestureAction {
    HoverStart,
    HoverEnd,
    PressStart,
    PressEnd,
}

impl Reducible for Gesture {
    type Action = GestureAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            GestureAction::HoverStart => Gesture { hovered: true, ..*self },
            // Leaving the element also cancels a press in progress.
            GestureAction::HoverEnd => Gesture { hovered: false, pressed: false },
            GestureAction::PressStart => Gesture { pressed: true, ..*self },
            GestureAction::PressEnd => Gesture { pressed: false, ..*self },
        };
        if next == *self { self } else { Rc::new(next) }
    }
}

impl Gesture {
    pub fn scale(&self, hover: f64, press: f64) -> f64 {
        if self.pressed {
            press
        } else if self.hovered {
            hover
        } else {
            1.0
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MotionLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    /// Open in a new browsing context with `noopener noreferrer`.
    #[prop_or(false)]
    pub new_tab: bool,
    /// Keep the click from reaching an enclosing clickable element.
    #[prop_or(false)]
    pub stop_propagation: bool,
    #[prop_or(1.05)]
    pub hover_scale: f64,
    #[prop_or(0.95)]
    pub press_scale: f64,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(MotionLink)]
pub fn motion_link(props: &MotionLinkProps) -> Html {
    let gesture = use_reducer(Gesture::default);

    let dispatch = |make: fn() -> GestureAction| {
        let gesture = gesture.clone();
        Callback::from(move |_: MouseEvent| gesture.dispatch(make()))
    };

    let onclick = {
        let stop = props.stop_propagation;
        let href = props.href.clone();
        Callback::from(move |e: MouseEvent| {
            if stop {
                e.stop_propagation();
            }
            web_sys::console::log_1(&format!("Following link {}", href).into());
        })
    };

    let style = format!(
        "display: inline-block; transform: scale({}); transition: transform 150ms ease-out;",
        gesture.scale(props.hover_scale, props.press_scale)
    );

    let (target, rel) = if props.new_tab {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    };

    html! {
        <a
            href={props.href.clone()}
            class={props.class.clone()}
            aria-label={props.aria_label.clone()}
            {target}
            {rel}
            {style}
            {onclick}
            onmouseenter={dispatch(|| GestureAction::HoverStart)}
            onmouseleave={dispatch(|| GestureAction::HoverEnd)}
            onmousedown={dispatch(|| GestureAction::PressStart)}
            onmouseup={dispatch(|| GestureAction::PressEnd)}
        >
            { props.children.clone() }
        </a>
    }
}

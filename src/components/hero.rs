use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::content::SiteContent;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub site: &'static SiteContent,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let site = props.site;

    html! {
        <FadeIn class="section hero">
            <div class="container centered">
                <h2 class="hero-headline bounce">{ &site.hero.headline }</h2>
                <p class="hero-tagline">{ &site.hero.tagline }</p>
                <a
                    href={site.profile_url.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="btn btn-orange btn-pill grow"
                    aria-label={format!("Hire {}", site.owner)}
                >
                    {"Hire Me"}
                </a>
            </div>
        </FadeIn>
    }
}

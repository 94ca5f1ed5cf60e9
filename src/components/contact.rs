use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::content::SiteContent;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub site: &'static SiteContent,
}

/// Same destinations as the header nav, so visitors who scroll past it still have them.
#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let site = props.site;

    html! {
        <FadeIn id="contact" class="section">
            <div class="container centered">
                <h2 class="section-title">{"Contact Me"}</h2>
                <p class="lead">{ &site.contact_blurb }</p>
                <div class="contact-links">
                    <a
                        href={site.profile_url.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-blue grow"
                        aria-label={site.hire_label()}
                    >
                        { site.hire_label() }
                    </a>
                    <a
                        href={site.mailto_href()}
                        class="btn btn-orange grow"
                        aria-label={site.email_label()}
                    >
                        {"Contact via Gmail"}
                    </a>
                </div>
            </div>
        </FadeIn>
    }
}

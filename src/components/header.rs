use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::content::SiteContent;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub site: &'static SiteContent,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let site = props.site;

    html! {
        <header class="site-header">
            <div class="container header-row">
                <div class="brand">
                    <Icon icon_id={IconId::LucideBox} width={"32"} height={"32"} />
                    <h1>{ &site.owner }</h1>
                </div>
                <nav class="header-nav">
                    <a
                        href={site.profile_url.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-blue hire-link"
                        aria-label={site.hire_label()}
                    >
                        { format!("Hire {}", site.owner) }
                        <Icon icon_id={IconId::LucideExternalLink} width={"16"} height={"16"} />
                    </a>
                    <a href={site.mailto_href()} class="mail-link" aria-label={site.email_label()}>
                        {"Contact via Gmail"}
                    </a>
                </nav>
            </div>
        </header>
    }
}

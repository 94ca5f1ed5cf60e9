#![cfg(not(target_arch = "wasm32"))]

use portfolio_ui::content::{Hero, ProjectDescriptor, SiteContent};
use portfolio_ui::pages::home::{HomePage, HomePageProps};
use portfolio_ui::App;
use yew::ServerRenderer;

const TITLES: [&str; 3] = [
    "Trippy Edits & Montages",
    "Ultra-Realistic Product Animation",
    "CGI Fantasy World Animation",
];

async fn render_app() -> String {
    ServerRenderer::<App>::new().hydratable(false).render().await
}

fn escaped(text: &str) -> String {
    text.replace('&', "&amp;")
}

/// Markup of each card, in document order.
/// A card ends with its Open link, the only anchor it holds.
fn cards(html: &str) -> Vec<&str> {
    html.split(r#"class="project-card""#)
        .skip(1)
        .map(|rest| match rest.find("</a>") {
            Some(end) => &rest[..end + "</a>".len()],
            None => rest,
        })
        .collect()
}

fn hrefs(fragment: &str) -> Vec<String> {
    fragment
        .split(r#"href=""#)
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(str::to_string)
        .collect()
}

fn section<'a>(html: &'a str, start: &str, end: &str) -> &'a str {
    let from = html.find(start).unwrap_or_else(|| panic!("missing {start}"));
    let rest = &html[from..];
    let to = rest.find(end).unwrap_or(rest.len());
    &rest[..to]
}

#[tokio::test]
async fn renders_three_cards_in_declaration_order() {
    let html = render_app().await;
    let cards = cards(&html);
    assert_eq!(cards.len(), 3);

    let positions: Vec<usize> = TITLES
        .iter()
        .map(|t| html.find(&format!(r#"<h3 class="project-title">{}</h3>"#, escaped(t))).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "cards out of order: {positions:?}");
}

#[tokio::test]
async fn each_card_shows_its_descriptor_once() {
    let html = render_app().await;
    let site = portfolio_ui::content::site().as_ref().unwrap();

    for (card, project) in cards(&html).iter().zip(&site.projects) {
        let heading = format!(r#"<h3 class="project-title">{}</h3>"#, escaped(&project.title));
        assert_eq!(card.matches(&heading).count(), 1, "title of {}", project.title);
        assert_eq!(
            card.matches(&escaped(&project.description)).count(),
            1,
            "description of {}",
            project.title
        );

        // Embedded preview plus the explicit Open control.
        assert_eq!(card.matches(&format!(r#"src="{}""#, project.video_url)).count(), 1);
        assert_eq!(hrefs(card), vec![project.video_url.clone()]);
        assert!(card.contains(&format!(r#"aria-label="Open {}""#, escaped(&project.title))));
        assert!(card.contains(">Open</a>"));
    }
}

#[tokio::test]
async fn cards_are_keyboard_reachable_buttons() {
    let html = render_app().await;
    assert_eq!(html.matches(r#"role="button""#).count(), 3);
    assert_eq!(html.matches(r#"tabindex="0""#).count(), 3);
}

#[tokio::test]
async fn project_links_are_distinct() {
    let html = render_app().await;
    let mut links: Vec<String> = cards(&html).iter().flat_map(|c| hrefs(c)).collect();
    links.sort();
    links.dedup();
    assert_eq!(links.len(), 3);
}

#[tokio::test]
async fn contact_links_match_header_and_are_valid() {
    let html = render_app().await;
    let header = hrefs(section(&html, "<header", "</header>"));
    let contact = hrefs(section(&html, r#"id="contact""#, "</section>"));

    assert_eq!(
        header,
        vec![
            "https://www.freelancer.com/u/youssef506".to_string(),
            "mailto:yokyheikal@gmail.com".to_string(),
        ]
    );
    assert_eq!(header, contact);

    for link in &header {
        let url = url::Url::parse(link).unwrap_or_else(|e| panic!("{link}: {e}"));
        assert!(["https", "mailto"].contains(&url.scheme()));
    }
}

#[tokio::test]
async fn sections_follow_document_order() {
    let html = render_app().await;
    let markers = [
        "<header",
        "Bringing Your Imagination to Life",
        r#"id="portfolio""#,
        r#"id="about""#,
        r#"id="contact""#,
        "<footer",
    ];
    let positions: Vec<usize> = markers
        .iter()
        .map(|m| html.find(m).unwrap_or_else(|| panic!("missing {m}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "sections out of order: {positions:?}");
    assert!(html.contains("© 2024 Youssef K. All rights reserved."));
}

#[tokio::test]
async fn sections_start_transparent() {
    let html = render_app().await;
    assert_eq!(html.matches("opacity: 0; transition: opacity 1000ms").count(), 4);
}

#[tokio::test]
async fn home_page_renders_any_project_list() {
    let site: &'static SiteContent = Box::leak(Box::new(SiteContent {
        owner: "Ada".into(),
        profile_url: "https://example.com/u/ada".into(),
        email: "ada@example.com".into(),
        hero: Hero { headline: "Hello".into(), tagline: "Reels".into() },
        projects: vec![
            ProjectDescriptor {
                title: "First".into(),
                description: "One".into(),
                video_url: "https://example.com/1".into(),
            },
            ProjectDescriptor {
                title: "Second".into(),
                description: "Two".into(),
                video_url: "https://example.com/2".into(),
            },
        ],
        about: vec!["Hi".into()],
        contact_blurb: "Write".into(),
        copyright_year: 2030,
    }));

    let html = ServerRenderer::<HomePage>::with_props(move || HomePageProps { site })
        .hydratable(false)
        .render()
        .await;

    let cards = cards(&html);
    assert_eq!(cards.len(), 2);
    assert!(cards[0].contains("First") && cards[1].contains("Second"));
    assert!(html.contains("© 2030 Ada. All rights reserved."));
}

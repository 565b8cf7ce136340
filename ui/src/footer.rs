use chrono::Datelike as _;
use dioxus::prelude::*;

const FOOTER_CSS: Asset = asset!("/assets/styling/footer.css");

struct SocialLink {
    name: &'static str,
    initial: &'static str,
    color: &'static str,
    url: &'static str,
}

impl SocialLink {
    fn style(&self, hovered: bool) -> String {
        if hovered {
            format!("background-color: {};", self.color)
        } else {
            String::new()
        }
    }
}

static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { name: "Facebook", initial: "f", color: "#1877F2", url: "https://www.facebook.com/oneisok/" },
    SocialLink { name: "Twitter", initial: "x", color: "#1DA1F2", url: "https://x.com/Oneisokindia" },
    SocialLink { name: "LinkedIn", initial: "in", color: "#0A66C2", url: "https://www.linkedin.com/company/oneisok/" },
    SocialLink { name: "YouTube", initial: "yt", color: "#FF0000", url: "#" },
];

/// Scroll offset, in pixels, past which the back-to-top button shows
const SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// Reports `window.scrollY` now and on every scroll
const WATCH_SCROLL_JS: &str = r#"
    dioxus.send(window.scrollY);
    window.addEventListener("scroll", () => dioxus.send(window.scrollY), { passive: true });
    await new Promise(() => {});
"#;

fn shows_scroll_top(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

#[component]
pub fn Footer() -> Element {
    let mut hovered = use_signal(|| None::<usize>);
    let mut scroll_top_visible = use_signal(|| false);

    use_future(move || async move {
        let mut watcher = document::eval(WATCH_SCROLL_JS);
        while let Ok(scroll_y) = watcher.recv::<f64>().await {
            let visible = shows_scroll_top(scroll_y);
            if *scroll_top_visible.peek() != visible {
                scroll_top_visible.set(visible);
            }
        }
    });
    let year = chrono::Local::now().year();

    rsx! {
        document::Link { rel: "stylesheet", href: FOOTER_CSS }

        footer {
            id: "footer",
            div {
                class: "footer-main",
                div {
                    class: "footer-brand",
                    h2 { "Oneisok" }
                    div { class: "rule" }
                    p { "Transforming ideas into digital reality with innovative solutions." }
                }

                div {
                    class: "footer-grid",
                    div {
                        h3 { "CONTACT INFO" }
                        ul {
                            class: "contact-list",
                            li { "Corp Office - 141/1B LENIN SARANI KOLKATA, KOLKATA-700013" }
                            li { a { href: "mailto:oneisokindia@gmail.com", "oneisokindia@gmail.com" } }
                            li { a { href: "tel:+919331222555", "+91 93312 22555" } }
                        }
                    }

                    div {
                        h3 { "SOCIAL MEDIA" }
                        p { "Connect with us!" }
                        div {
                            class: "social-grid",
                            for (index, social) in SOCIAL_LINKS.iter().enumerate() {
                                a {
                                    key: "{social.name}",
                                    href: social.url,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    title: social.name,
                                    class: "social",
                                    style: social.style(hovered() == Some(index)),
                                    onmouseenter: move |_| hovered.set(Some(index)),
                                    onmouseleave: move |_| hovered.set(None),
                                    "{social.initial}"
                                }
                            }
                        }
                    }

                    div {
                        h3 { "STAY UPDATED" }
                        p { "Get our latest updates and insights." }
                        div {
                            class: "newsletter",
                            input { r#type: "email", placeholder: "Your email" }
                            button { r#type: "button", "Join" }
                        }
                    }
                }
            }

            div {
                class: "footer-bottom",
                span { "© {year} Oneisok. Made with ❤ in Kolkata" }
                nav {
                    a { href: "https://oneisok.co/", "Privacy Policy" }
                    a { href: "https://oneisok.co/", "Terms of Service" }
                    a { href: "https://oneisok.co/", "oneisok.co" }
                }
            }

            button {
                class: if scroll_top_visible() { "scroll-top visible" } else { "scroll-top" },
                title: "Back to top",
                onclick: move |_| {
                    document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
                },
                "↑"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_top_appears_past_threshold() {
        assert!(!shows_scroll_top(0.0));
        assert!(!shows_scroll_top(300.0));
        assert!(shows_scroll_top(300.5));
        assert!(shows_scroll_top(1200.0));
    }

    #[test]
    fn social_links_point_at_oneisok_profiles() {
        let names: Vec<_> = SOCIAL_LINKS.iter().map(|link| link.name).collect();
        assert_eq!(names, ["Facebook", "Twitter", "LinkedIn", "YouTube"]);

        for link in &SOCIAL_LINKS[..3] {
            assert!(link.url.starts_with("https://"), "{} has no profile URL", link.name);
            assert!(link.url.to_lowercase().contains("oneisok"));
        }
    }

    #[test]
    fn hover_style_uses_brand_color() {
        assert_eq!(SOCIAL_LINKS[0].style(true), "background-color: #1877F2;");
        assert!(SOCIAL_LINKS[0].style(false).is_empty());
    }
}

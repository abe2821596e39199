use dioxus::prelude::*;

use crate::components::{Container, Main, Title};

const PAGE_TITLE: &str = "О проекте - Технологии";
const PAGE_DESCRIPTION: &str =
    "Узнайте о технологиях, используемых в проекте Фудграм, включая Python, Django и другие.";
const OG_DESCRIPTION: &str =
    "Подробная информация о технологиях, применяемых в проекте Фудграм.";
const OG_URL: &str = "https://yourwebsite.com/technologies";
const OG_IMAGE: &str = "https://yourwebsite.com/images/technologies.jpg";

/// Static informational page about the technology stack behind the project.
#[component]
pub fn Technologies() -> Element {
    rsx! {
        Main {
            document::Title { "{PAGE_TITLE}" }
            document::Meta { name: "description", content: "{PAGE_DESCRIPTION}" }
            document::Meta { property: "og:title", content: "{PAGE_TITLE}" }
            document::Meta { property: "og:description", content: "{OG_DESCRIPTION}" }
            document::Meta { property: "og:type", content: "website" }
            document::Meta { property: "og:url", content: "{OG_URL}" }
            document::Meta { property: "og:image", content: "{OG_IMAGE}" }

            Container {
                Title { text: "Технологии" }
                div { class: "content",
                    div {
                        h2 { class: "subtitle", "Технологии, которые применены в этом проекте:" }
                        div { class: "text",
                            ul { class: "text-item",
                                li { class: "text-item",
                                    strong { "Python" }
                                    " - высокоуровневый язык программирования, известный своей простотой и читаемостью. Используется для создания серверной логики."
                                }
                                li { class: "text-item",
                                    strong { "Django" }
                                    " - мощный веб-фреймворк для Python, который упрощает создание сложных веб-приложений благодаря встроенным инструментам и библиотекам."
                                }
                                li { class: "text-item",
                                    strong { "Django REST Framework" }
                                    " - расширение для Django, которое позволяет легко создавать RESTful API, обеспечивая гибкость и масштабируемость."
                                }
                                li { class: "text-item",
                                    strong { "Djoser" }
                                    " - библиотека для Django, которая упрощает управление аутентификацией и авторизацией пользователей через REST API."
                                }
                            }
                        }
                        div { class: "additional-info",
                            h3 { class: "subtitle", "Преимущества использования этих технологий:" }
                            ul { class: "text-item",
                                li { class: "text-item",
                                    strong { "Быстрая разработка:" }
                                    " Благодаря Django и его инструментам, разработка веб-приложений становится более быстрой и эффективной."
                                }
                                li { class: "text-item",
                                    strong { "Масштабируемость:" }
                                    " Эти технологии позволяют легко масштабировать приложение по мере роста нагрузки."
                                }
                                li { class: "text-item",
                                    strong { "Сообщество и поддержка:" }
                                    " Большое сообщество разработчиков, готовых помочь и поделиться опытом."
                                }
                            }
                        }
                        div { class: "examples",
                            h3 { class: "subtitle", "Примеры использования:" }
                            p { class: "text",
                                "Эти технологии используются в различных проектах, от небольших стартапов до крупных корпоративных приложений. Например, Instagram использует Django для своей серверной части."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_page() -> String {
        let mut dom = VirtualDom::new(Technologies);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_single_page_heading() {
        let html = render_page();
        assert_eq!(html.matches("<h1").count(), 1);
        assert!(html.contains("Технологии"));
    }

    #[test]
    fn head_metadata_matches_authored_copy() {
        assert_eq!(PAGE_TITLE, "О проекте - Технологии");
        assert_eq!(
            PAGE_DESCRIPTION,
            "Узнайте о технологиях, используемых в проекте Фудграм, включая Python, Django и другие."
        );
        assert_eq!(
            OG_DESCRIPTION,
            "Подробная информация о технологиях, применяемых в проекте Фудграм."
        );
        assert_eq!(OG_URL, "https://yourwebsite.com/technologies");
        assert_eq!(OG_IMAGE, "https://yourwebsite.com/images/technologies.jpg");
    }

    #[test]
    fn technology_list_has_four_bold_entries() {
        let html = render_page();
        let (technologies, _) = html
            .split_once("Преимущества использования")
            .expect("advantages section present");
        assert_eq!(technologies.matches("<li").count(), 4);
        for name in ["Python", "Django", "Django REST Framework", "Djoser"] {
            assert!(
                technologies.contains(&format!("<strong>{name}</strong>")),
                "missing bold entry for {name}"
            );
        }
    }

    #[test]
    fn advantages_list_has_three_bold_entries() {
        let html = render_page();
        let (_, advantages) = html
            .split_once("Преимущества использования")
            .expect("advantages section present");
        assert_eq!(advantages.matches("<li").count(), 3);
        for label in ["Быстрая разработка:", "Масштабируемость:", "Сообщество и поддержка:"] {
            assert!(
                advantages.contains(&format!("<strong>{label}</strong>")),
                "missing bold entry for {label}"
            );
        }
    }

    #[test]
    fn examples_section_present() {
        let html = render_page();
        assert!(html.contains("Примеры использования:"));
        assert!(html.contains("Instagram использует Django для своей серверной части."));
    }

    #[test]
    fn rendering_is_idempotent() {
        assert_eq!(render_page(), render_page());
    }

    #[test]
    fn page_has_no_interactive_controls() {
        let html = render_page();
        assert!(html.contains("Быстрая разработка:"));
        for tag in ["<button", "<form", "<input", "<select", "<textarea"] {
            assert!(!html.contains(tag), "unexpected interactive element {tag}");
        }
    }
}

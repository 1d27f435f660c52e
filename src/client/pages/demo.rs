#![allow(non_snake_case)]

use dioxus::prelude::*;

const SERVICES: [&str; 3] = ["牙齿美白", "种植牙", "正畸矫正"];
const DOCTORS: [&str; 3] = ["张医生", "李医生", "王医生"];

struct Case {
    before: &'static str,
    after: &'static str,
    desc: &'static str,
}

static CASES: [Case; 2] = [
    Case {
        before: "/cases/before1.jpg",
        after: "/cases/after1.jpg",
        desc: "牙齿美白案例",
    },
    Case {
        before: "/cases/before2.jpg",
        after: "/cases/after2.jpg",
        desc: "种植牙案例",
    },
];

/// Dental portfolio landing page.
#[component]
pub fn Demo() -> Element {
    let mut selected_image = use_signal(|| Option::<&'static str>::None);
    let mut booked = use_signal(|| Option::<String>::None);

    rsx! {
    style { { include_str!("css/demo.css") } }
    div {
        class: "demo",

        header {
            class: "demo-header",
            div { class: "demo-brand", "牙医作品集" }
            nav {
                a { href: "#services", "服务项目" }
                a { href: "#cases", "作品集" }
                a { href: "#team", "医生团队" }
                a { href: "#contact", "联系我们" }
            }
            a { class: "demo-button", href: "#appointment", "在线预约" }
        }

        section {
            class: "demo-banner",
            div {
                h1 { "让微笑更自信" }
                p { "专业牙医团队，守护您的口腔健康" }
                a { class: "demo-button demo-button-large", href: "#appointment", "立即预约" }
            }
        }

        section {
            id: "services",
            class: "demo-section demo-muted",
            h2 { "服务项目" }
            div {
                class: "demo-grid demo-grid-3",
                for service in SERVICES {
                    div {
                        key: "{service}",
                        class: "demo-card demo-card-lift",
                        div { class: "demo-icon", "🦷" }
                        div { class: "demo-card-title", "{service}" }
                        div { class: "demo-card-text", "专业{service}服务，安全舒适，效果显著。" }
                    }
                }
            }
        }

        section {
            id: "cases",
            class: "demo-section",
            h2 { "作品集展示" }
            div {
                class: "demo-grid demo-grid-2",
                for case in CASES.iter() {
                    div {
                        key: "{case.desc}",
                        class: "demo-card",
                        div {
                            class: "demo-case-images",
                            img {
                                src: case.before,
                                alt: "before",
                                width: "180",
                                height: "120",
                                onclick: move |_| selected_image.set(Some(case.before)),
                            }
                            img {
                                src: case.after,
                                alt: "after",
                                width: "180",
                                height: "120",
                                onclick: move |_| selected_image.set(Some(case.after)),
                            }
                        }
                        div { class: "demo-card-text", "{case.desc}" }
                    }
                }
            }

            if let Some(image) = selected_image() {
                div {
                    class: "demo-lightbox",
                    onclick: move |_| selected_image.set(None),
                    img { src: image, alt: "case" }
                }
            }
        }

        section {
            id: "team",
            class: "demo-section demo-muted",
            h2 { "医生团队" }
            div {
                class: "demo-grid demo-grid-3",
                for name in DOCTORS {
                    div {
                        key: "{name}",
                        class: "demo-card",
                        div { class: "demo-avatar", "👨‍⚕️" }
                        div { class: "demo-card-title", "{name}" }
                        div { class: "demo-card-text", "10年+经验，专注口腔健康" }
                    }
                }
            }
        }

        section {
            id: "appointment",
            class: "demo-section",
            h2 { "在线预约" }
            if let Some(name) = booked() {
                p { class: "demo-card-text", "{name}，预约已提交，我们会尽快联系您。" }
            } else {
                form {
                    class: "demo-form",
                    onsubmit: move |event| {
                        let name = event
                            .values()
                            .get("name")
                            .map(|value| value.as_value())
                            .unwrap_or_default();
                        tracing::info!("appointment requested");
                        booked.set(Some(name));
                    },
                    input { name: "name", placeholder: "姓名", required: true }
                    input { name: "contact", placeholder: "联系方式", required: true }
                    select {
                        name: "service",
                        option { "选择服务项目" }
                        for service in SERVICES {
                            option { key: "{service}", "{service}" }
                        }
                    }
                    button { r#type: "submit", "提交预约" }
                }
            }
        }

        footer {
            id: "contact",
            class: "demo-footer",
            "© 2025 牙医作品集 | 联系电话：123-456-7890"
        }
    }
    }
}

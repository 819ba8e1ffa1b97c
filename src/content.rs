// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Built-in catalog compiled into the binary.

use crate::models::{
    about::{AboutData, SkillGroup, TimelineEntry},
    catalog::Catalog,
    lab::LabItem,
    localized::{LocalizedParagraphs, LocalizedString as L},
    project::{GalleryBlock, ProjectKind, ProjectRecord},
};

/// The default portfolio content.
pub fn builtin() -> Catalog {
    Catalog {
        projects: projects(),
        lab: lab_items(),
        about: about(),
    }
}

fn text(en: &str, ko: &str) -> GalleryBlock {
    GalleryBlock::Text {
        content: L::both(en, ko),
        lang: None,
    }
}

fn image(src: &str) -> GalleryBlock {
    GalleryBlock::Image { src: src.into() }
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

fn projects() -> Vec<ProjectRecord> {
    let mut hibiscus = ProjectRecord::new(1, "HIBISCUS PACKAGING", "BLENDER / KEYSHOT");
    hibiscus.video = Some("/box.mp4".into());
    hibiscus.poster = Some("/package.webp".into());
    hibiscus.layout = "md:col-span-2 bg-white hover:shadow-[8px_8px_0px_0px_rgba(0,0,0,1)]".into();
    hibiscus.is_featured = true;
    hibiscus.description = L::both(
        "An elegant packaging design for a premium hibiscus tea brand. The goal was to capture the organic and vibrant nature of the flower through texture and lighting.",
        "프리미엄 히비스커스 티 브랜드를 위한 패키지 디자인입니다. 질감과 조명을 통해 꽃의 유기적이고 생동감 있는 느낌을 담는 것이 목표였습니다.",
    );
    hibiscus.tags = tags(&["Blender", "KeyShot", "Packaging Design", "3D Rendering"]);
    hibiscus.gallery = vec![
        text(
            "01. STRUCTURE DESIGN\nFirst, I designed the base geometry using Blender to ensure structural integrity.",
            "01. 구조 설계\n먼저 Blender로 기본 형태를 설계해 구조적 안정성을 확보했습니다.",
        ),
        image("/model.webp"),
        text(
            "02. MATERIAL & LIGHTING PROCESS\nUsing KeyShot, I experimented with various material nodes and lighting setups to achieve a realistic texture.",
            "02. 재질 및 조명 작업\nKeyShot에서 다양한 재질 노드와 조명 세팅을 실험해 사실적인 질감을 구현했습니다.",
        ),
        GalleryBlock::Video {
            src: "/process.mp4".into(),
        },
        text(
            "03. VISUALIZATION\nThe final rendering focuses on the clean, minimal aesthetic of the brand.",
            "03. 시각화\n최종 렌더링은 브랜드의 깔끔하고 미니멀한 미감에 집중했습니다.",
        ),
        image("/package.webp"),
        text(
            "04. PRODUCTION READY\nI also created the precise die-line (blueprint) for actual mass production.",
            "04. 양산 준비\n실제 양산을 위한 정밀한 도면(칼선)도 함께 제작했습니다.",
        ),
        image("/dieline.webp"),
        text(
            "05. CONTEXT\nA lifestyle mockup showing how the product looks in a real-world environment.",
            "05. 맥락\n실제 환경에서 제품이 어떻게 보이는지 보여주는 라이프스타일 목업입니다.",
        ),
        image("/lifestyle.webp"),
    ];

    let mut order = ProjectRecord::new(2, "CHOCOLATE-ORDER SYSTEM", "REACT / TAILWIND");
    order.video = Some("/dashboard.mp4".into());
    order.layout = "md:col-span-1 bg-black text-white hover:shadow-[8px_8px_0px_0px_rgba(113,113,122,1)]".into();
    order.kind = ProjectKind::Interactive;
    order.embed_url = Some("https://order.verygood-chocolate.com/".into());
    order.link = "https://order.verygood-chocolate.com/".into();
    order.description = L::both(
        "A chocolate ordering system running in production. Try it right inside the modal!",
        "실제 운영 중인 초콜릿 주문 시스템입니다. 모달 안에서 바로 체험해보세요!",
    );
    order.tags = tags(&["React", "Tailwind CSS", "Recharts", "Framer Motion"]);
    order.gallery = vec![
        text(
            "ORDER FLOW\nCustomers pick boxes, fillings and a pickup slot in three steps.",
            "주문 흐름\n고객은 박스, 필링, 픽업 시간을 세 단계로 선택합니다.",
        ),
        GalleryBlock::Code {
            content: L::plain(
                "const total = items.reduce((sum, it) => sum + it.price * it.qty, 0);",
            ),
            lang: Some("ts".into()),
        },
    ];

    let mut detector = ProjectRecord::new(3, "BLOG\nDETECTOR", "D3.JS / TYPESCRIPT");
    detector.video = Some("/algo.mp4".into());
    detector.layout = "md:col-span-1 bg-gray-200 text-black hover:bg-[#edc5c4]".into();
    detector.kind = ProjectKind::Video;
    detector.description = L::both(
        "Visualizing complex algorithms in real-time using D3.js. This tool helps developers understand data structures and sorting algorithms through interactive animations.",
        "D3.js로 복잡한 알고리즘을 실시간으로 시각화합니다. 인터랙티브 애니메이션으로 자료구조와 정렬 알고리즘을 이해하도록 돕는 도구입니다.",
    );
    detector.tags = tags(&["D3.js", "TypeScript", "Algorithms", "SVG"]);

    let mut blog = ProjectRecord::new(4, "WEBPAGE\nBLOG", "WEBGL / SHADERS");
    blog.video = Some("/cyber.mp4".into());
    blog.layout = "md:col-span-2 bg-gray-200 text-black hover:bg-[#FFC497] h-[200px]".into();
    blog.kind = ProjectKind::Video;
    blog.description = L::both(
        "A cyberpunk-inspired blog interface featuring GLSL shaders for background effects and unique typography treatments. A blend of high-tech aesthetics and brutalist design.",
        "GLSL 셰이더 배경 효과와 독특한 타이포그래피를 사용한 사이버펑크풍 블로그 인터페이스입니다. 하이테크 미감과 브루탈리즘 디자인의 결합입니다.",
    );
    blog.tags = tags(&["WebGL", "GLSL Shaders", "React-Three-Fiber", "Typography"]);
    blog.github = Some("https://github.com/".into());

    vec![hibiscus, order, detector, blog]
}

fn lab(id: u32, title: &str, date: &str, height: u32, color: &str, category: &str) -> LabItem {
    LabItem {
        id,
        title: title.into(),
        date: date.into(),
        height: format!("h-[{height}px]"),
        color: color.into(),
        category: Some(category.into()),
        year: None,
    }
}

fn lab_items() -> Vec<LabItem> {
    vec![
        lab(1, "Shader Test #01", "FEB 05, 2026", 300, "bg-gray-300", "3D / Shader"),
        lab(2, "React Flow Node", "FEB 04, 2026", 450, "bg-gray-400", "React"),
        lab(3, "Neon Typography", "FEB 03, 2026", 250, "bg-gray-500", "Type Design"),
        lab(4, "Three.js Cube", "FEB 02, 2026", 350, "bg-gray-600", "Three.js"),
        lab(5, "Glitch Effect", "FEB 01, 2026", 400, "bg-gray-700", "Motion"),
        lab(6, "UI Component", "JAN 30, 2026", 300, "bg-gray-800", "UI Design"),
        lab(7, "Particle Field", "DEC 12, 2025", 350, "bg-gray-400", "WebGL"),
        lab(8, "Kinetic Poster", "NOV 03, 2025", 300, "bg-gray-500", "Motion"),
        lab(9, "Form Wizard", "SEP 21, 2025", 250, "bg-gray-300", "Web"),
    ]
}

fn about() -> AboutData {
    AboutData {
        slogan: L::both("BREAKING BARRIERS", "경계를 허물다"),
        paragraphs: LocalizedParagraphs {
            en: vec![
                "I design and build things that live between 3D, motion and the web.".into(),
                "Every project starts from structure and ends with the small details people actually touch.".into(),
            ],
            ko: vec![
                "3D, 모션, 웹 사이의 경계에서 무언가를 디자인하고 만듭니다.".into(),
                "모든 작업은 구조에서 시작해 사람들이 실제로 만지는 작은 디테일에서 끝납니다.".into(),
            ],
        },
        timeline: vec![
            TimelineEntry {
                period: "2026".into(),
                title: L::both("Independent studio", "독립 스튜디오"),
                detail: L::both(
                    "Packaging, product visualisation and web work for small brands.",
                    "소규모 브랜드를 위한 패키지, 제품 시각화, 웹 작업.",
                ),
            },
            TimelineEntry {
                period: "2024 - 2025".into(),
                title: L::both("Frontend developer", "프론트엔드 개발자"),
                detail: L::both(
                    "Dashboards and ordering systems in React.",
                    "React 기반 대시보드와 주문 시스템 개발.",
                ),
            },
        ],
        skills: vec![
            SkillGroup {
                category: "3D".into(),
                items: tags(&["Blender", "KeyShot", "Three.js"]),
            },
            SkillGroup {
                category: "WEB".into(),
                items: tags(&["React", "TypeScript", "Tailwind CSS", "D3.js"]),
            },
            SkillGroup {
                category: "MOTION".into(),
                items: tags(&["Framer Motion", "GLSL"]),
            },
        ],
    }
}

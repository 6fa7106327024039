mod common;

use axum::http::StatusCode;
use common::spawn_app;
use serde_json::Value;

fn names(list: &Value, key: &str) -> Vec<String> {
    list.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|item| item[key].as_str().unwrap_or_default().to_string())
        .collect()
}

#[tokio::test]
async fn home_page_renders_featured_content_and_stats() {
    let t = spawn_app("home", true).await;

    let resp = t.get("/").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.header("x-inertia"), Some("true"));
    assert_eq!(resp.header("vary"), Some("X-Inertia"));

    let page = resp.json();
    assert_eq!(page["component"], "home");
    assert_eq!(page["url"], "/");
    assert_eq!(page["version"], "1");

    let props = &page["props"];
    assert_eq!(props["doctors"].as_array().unwrap().len(), 5);
    assert_eq!(props["doctors"][0]["image"], "/images/doctor-placeholder.jpg");
    assert_eq!(props["testimonials"].as_array().unwrap().len(), 6);
    assert_eq!(
        props["testimonials"][0]["patient_image"],
        "/images/patient-placeholder.jpg"
    );
    assert_eq!(props["stats"]["doctors"], 5);
    assert_eq!(props["stats"]["patients"], 15000);
    assert_eq!(props["stats"]["years"], 15);
    assert_eq!(props["stats"]["awards"], 8);
}

#[tokio::test]
async fn doctor_index_applies_each_filter() {
    let t = spawn_app("doctor-filters", true).await;

    let all = t.get("/doctors").await.json();
    assert_eq!(all["component"], "doctors");
    assert_eq!(all["props"]["doctors"].as_array().unwrap().len(), 5);
    assert_eq!(all["props"]["specialties"].as_array().unwrap().len(), 5);

    let blank = t.get("/doctors?specialty=&search=").await.json();
    assert_eq!(blank["props"]["doctors"].as_array().unwrap().len(), 5);

    let by_specialty = t.get("/doctors?specialty=anak").await.json();
    assert_eq!(
        names(&by_specialty["props"]["doctors"], "name"),
        ["Dr. Siti Nurhaliza, Sp.A"]
    );

    let by_search = t.get("/doctors?search=budi").await.json();
    assert_eq!(
        names(&by_search["props"]["doctors"], "name"),
        ["Dr. Budi Hartono, Sp.PD"]
    );

    let by_type = t.get("/doctors?consultation_type=emergency").await.json();
    assert_eq!(
        names(&by_type["props"]["doctors"], "name"),
        ["Dr. Siti Nurhaliza, Sp.A", "Dr. Maya Sari, Sp.OG"]
    );

    let combined = t
        .get("/doctors?consultation_type=online&search=mata")
        .await
        .json();
    assert_eq!(
        names(&combined["props"]["doctors"], "name"),
        ["Dr. Indra Kusuma, Sp.M"]
    );
}

#[tokio::test]
async fn unavailable_doctors_are_hidden_from_listing_but_keep_their_profile() {
    let t = spawn_app("doctor-availability", true).await;
    t.exec("UPDATE doctors SET is_available = 0 WHERE id = 1").await;

    let index = t.get("/doctors").await.json();
    let listed = names(&index["props"]["doctors"], "name");
    assert_eq!(listed.len(), 4);
    assert!(!listed.contains(&"Dr. Ahmad Wijaya, Sp.JP".to_string()));
    // specialties still cover every doctor
    assert_eq!(index["props"]["specialties"].as_array().unwrap().len(), 5);

    let resp = t.get("/doctors/1").await;
    assert_eq!(resp.status, StatusCode::OK);
    let page = resp.json();
    assert_eq!(page["component"], "doctor-detail");
    let doctor = &page["props"]["doctor"];
    assert_eq!(doctor["is_available"], false);
    assert_eq!(doctor["schedule"], Value::Array(vec![]));
    assert_eq!(doctor["consultation_types"][1], "online");
}

#[tokio::test]
async fn unknown_doctor_is_not_found() {
    let t = spawn_app("doctor-404", true).await;
    let resp = t.get("/doctors/999").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.json()["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn article_index_lists_newest_first_with_featured_and_categories() {
    let t = spawn_app("article-index", true).await;

    let page = t.get("/articles").await.json();
    assert_eq!(page["component"], "articles");
    let props = &page["props"];

    let titles = names(&props["articles"], "title");
    assert_eq!(titles.len(), 5);
    assert_eq!(titles[0], "Cara Menjaga Kesehatan Mata di Era Digital");
    assert_eq!(titles[4], "10 Tips Menjaga Kesehatan Jantung");
    assert!(props["articles"][0]["formatted_date"].is_string());
    assert!(props["articles"][0].get("content").is_none());

    assert_eq!(props["featuredArticles"].as_array().unwrap().len(), 3);
    assert_eq!(props["categories"].as_array().unwrap().len(), 5);

    let pediatri = t.get("/articles?category=Pediatri").await.json();
    assert_eq!(
        names(&pediatri["props"]["articles"], "title"),
        ["Pentingnya Imunisasi untuk Anak"]
    );

    let by_author = t.get("/articles?search=maya").await.json();
    assert_eq!(
        names(&by_author["props"]["articles"], "title"),
        ["Persiapan Kehamilan yang Sehat"]
    );
}

#[tokio::test]
async fn article_show_counts_views_and_lists_related() {
    let t = spawn_app("article-show", true).await;
    t.exec(
        "INSERT INTO articles (title, excerpt, content, author, category, read_time, views, likes, featured, published, created_at, updated_at)
         VALUES ('Olahraga untuk Jantung', 'Ringkas', 'Isi', 'Dr. Ahmad Wijaya, Sp.JP', 'Kardiologi', '3 menit', 0, 0, 0, 1, '2025-01-01T00:00:00+00:00', '2025-01-01T00:00:00+00:00')",
    )
    .await;

    let first = t.get("/articles/1").await;
    assert_eq!(first.status, StatusCode::OK);
    let page = first.json();
    assert_eq!(page["component"], "article-detail");
    assert_eq!(page["props"]["article"]["views"], 1251);
    assert!(page["props"]["article"]["content"].is_string());
    assert_eq!(
        names(&page["props"]["relatedArticles"], "title"),
        ["Olahraga untuk Jantung"]
    );

    let second = t.get("/articles/1").await.json();
    assert_eq!(second["props"]["article"]["views"], 1252);
}

#[tokio::test]
async fn unpublished_articles_are_hidden() {
    let t = spawn_app("article-unpublished", true).await;
    t.exec("UPDATE articles SET published = 0 WHERE id = 2").await;

    assert_eq!(t.get("/articles/2").await.status, StatusCode::NOT_FOUND);
    assert_eq!(
        t.post("/articles/2/like", "application/json", "").await.status,
        StatusCode::NOT_FOUND
    );

    let index = t.get("/articles").await.json();
    assert_eq!(index["props"]["articles"].as_array().unwrap().len(), 4);
    // categories are drawn from every article
    assert_eq!(index["props"]["categories"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn liking_an_article_returns_the_new_count() {
    let t = spawn_app("article-like", true).await;

    let resp = t.post("/articles/1/like", "application/json", "").await;
    assert_eq!(resp.status, StatusCode::OK);
    let body = resp.json();
    assert_eq!(body["id"], 1);
    assert_eq!(body["likes"], 90);

    let again = t.post("/articles/1/like", "application/json", "").await.json();
    assert_eq!(again["likes"], 91);
}

#[tokio::test]
async fn facilities_are_ordered_and_filterable() {
    let t = spawn_app("facilities", true).await;
    t.exec("UPDATE facilities SET is_active = 0 WHERE name = 'Radiologi & Imaging'")
        .await;

    let page = t.get("/facilities").await.json();
    assert_eq!(page["component"], "facilities");
    assert_eq!(
        names(&page["props"]["facilities"], "name"),
        [
            "Unit Gawat Darurat (UGD)",
            "Intensive Care Unit (ICU)",
            "Laboratorium Patologi Klinik",
            "Hospital Information System (HIS)",
        ]
    );
    assert_eq!(
        page["props"]["categories"],
        serde_json::json!(["medical", "support", "general", "technology"])
    );

    let support = t.get("/facilities?category=support").await.json();
    assert_eq!(
        names(&support["props"]["facilities"], "name"),
        ["Laboratorium Patologi Klinik"]
    );

    let his = t.get("/facilities?category=technology").await.json();
    assert_eq!(his["props"]["facilities"][0]["coverage"], "100% digital");
    assert_eq!(his["props"]["facilities"][0]["benefits"][0], "Paperless");

    let bad = t.get("/facilities?category=spa").await;
    assert_eq!(bad.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(bad.json()["error"]["fields"]["category"].is_array());
}

#[tokio::test]
async fn static_pages_and_health_probe() {
    let t = spawn_app("static", false).await;

    let schedule = t.get("/schedule").await.json();
    assert_eq!(schedule["component"], "schedule");
    assert_eq!(schedule["props"], serde_json::json!({}));

    let contact = t.get("/contact?from=footer").await.json();
    assert_eq!(contact["component"], "contact");
    assert_eq!(contact["url"], "/contact?from=footer");

    let up = t.get("/up").await;
    assert_eq!(up.status, StatusCode::OK);
    assert_eq!(up.text(), "OK");
}

#[tokio::test]
async fn empty_database_renders_empty_pages() {
    let t = spawn_app("empty", false).await;

    let home = t.get("/").await.json();
    assert_eq!(home["props"]["doctors"], Value::Array(vec![]));
    assert_eq!(home["props"]["stats"]["doctors"], 0);

    let articles = t.get("/articles").await.json();
    assert_eq!(articles["props"]["categories"], Value::Array(vec![]));
}

#[tokio::test]
async fn undecodable_path_and_query_render_error_body() {
    let t = spawn_app("bad-params", true).await;

    for uri in ["/doctors/abc", "/articles/abc", "/appointments/1.5/success"] {
        let resp = t.get(uri).await;
        assert_eq!(resp.status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(resp.header("content-type"), Some("application/json"), "{uri}");
        assert_eq!(resp.json()["error"]["code"], "BAD_REQUEST", "{uri}");
    }

    let resp = t.post("/articles/abc/like", "application/json", "").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.json()["error"]["code"], "BAD_REQUEST");

    let resp = t.get("/doctors?search=budi&search=siti").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.json()["error"]["code"], "BAD_REQUEST");
}

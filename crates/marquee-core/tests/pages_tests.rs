use marquee_core::TestApp;
use marquee_core::templates::names;

// ═══ End-to-end ticket scenario ═══

#[tokio::test]
async fn test_tickets_page_shows_single_seeded_ticket() {
    let app = TestApp::new().await;
    let movie = app.seed_movie("Inception", "Sci-Fi", 148).await;
    let screen = app.seed_screen(1, 100).await;
    let customer = app.seed_customer("Ada", "ada@example.com").await;
    let showtime = app.seed_showtime(movie, screen, "2024-01-01", "18:00").await;
    app.seed_ticket(showtime, customer, "2024-01-01", 12.50).await;

    let res = app.client.get(&app.url("/Tickets")).await;
    assert_eq!(res.status, 200, "body: {}", res.body);

    let rows = res.rows("ticket-row");
    assert_eq!(rows.len(), 1, "exactly one ticket row expected: {:?}", rows);
    assert!(
        rows[0].contains("<td class=\"showtime-label\">Inception - 2024-01-01 18:00</td>"),
        "row: {}",
        rows[0]
    );
    assert!(
        rows[0].contains("<td class=\"customer-name\">Ada</td>"),
        "row: {}",
        rows[0]
    );
    assert!(rows[0].contains("<td>12.50</td>"), "row: {}", rows[0]);
}

#[tokio::test]
async fn test_tickets_page_includes_edit_dropdowns() {
    let app = TestApp::new().await;
    let movie = app.seed_movie("Inception", "Sci-Fi", 148).await;
    let screen = app.seed_screen(1, 100).await;
    app.seed_customer("Ada", "ada@example.com").await;
    app.seed_customer("Grace", "grace@example.com").await;
    app.seed_showtime(movie, screen, "2024-01-01", "18:00").await;

    let res = app.client.get(&app.url("/Tickets")).await;
    assert_eq!(res.status, 200);
    assert!(res.rows("ticket-row").is_empty());
    assert!(res.body.contains(">Inception - 2024-01-01 18:00</option>"));
    assert!(res.body.contains(">Ada</option>"));
    assert!(res.body.contains(">Grace</option>"));
}

#[tokio::test]
async fn test_ticket_pages_use_shared_dropdown_keys() {
    let templates = marquee_core::Templates::from_raw(&[
        (
            names::TICKETS,
            "{% for s in showtime %}[{{ s.showtimeLabel }}]{% endfor %}\
             {% for c in customer %}[{{ c.name }}]{% endfor %}",
        ),
        (
            names::EDIT_TICKET,
            "{% for s in movieList %}[{{ s.showtimeLabel }}]{% endfor %}\
             {% for c in customerList %}[{{ c.name }}]{% endfor %}",
        ),
    ])
    .unwrap();
    let app = TestApp::with_templates(templates).await;
    let movie = app.seed_movie("Inception", "Sci-Fi", 148).await;
    let screen = app.seed_screen(1, 100).await;
    app.seed_showtime(movie, screen, "2024-01-01", "18:00").await;
    app.seed_customer("Ada", "ada@example.com").await;

    for path in ["/Tickets", "/EditTicket"] {
        let res = app.client.get(&app.url(path)).await;
        assert_eq!(res.status, 200, "{path}: {}", res.body);
        assert_eq!(res.body, "[Inception - 2024-01-01 18:00][Ada]", "{path}");
    }
}

// ═══ List ordering ═══

#[tokio::test]
async fn test_movies_listed_by_title() {
    let app = TestApp::new().await;
    app.seed_movie("Zodiac", "Thriller", 157).await;
    app.seed_movie("Alien", "Horror", 117).await;
    app.seed_movie("Memento", "Mystery", 113).await;

    let res = app.client.get(&app.url("/Movies")).await;
    assert_eq!(res.status, 200);

    let rows = res.rows("movie-row");
    assert_eq!(rows.len(), 3);
    assert!(rows[0].contains("Alien"));
    assert!(rows[1].contains("Memento"));
    assert!(rows[2].contains("Zodiac"));
}

#[tokio::test]
async fn test_screens_listed_by_capacity_descending() {
    let app = TestApp::new().await;
    app.seed_screen(1, 80).await;
    app.seed_screen(2, 200).await;
    app.seed_screen(3, 120).await;

    let res = app.client.get(&app.url("/Screens")).await;
    assert_eq!(res.status, 200);

    let rows = res.rows("screen-row");
    assert_eq!(rows.len(), 3);
    assert!(rows[0].contains("<td>200</td>"), "{}", rows[0]);
    assert!(rows[1].contains("<td>120</td>"), "{}", rows[1]);
    assert!(rows[2].contains("<td>80</td>"), "{}", rows[2]);
}

#[tokio::test]
async fn test_customers_listed_by_name() {
    let app = TestApp::new().await;
    app.seed_customer("Zed", "zed@example.com").await;
    app.seed_customer("Ada", "ada@example.com").await;
    app.seed_customer("Mia", "mia@example.com").await;

    let res = app.client.get(&app.url("/Customers")).await;
    assert_eq!(res.status, 200);

    let rows = res.rows("customer-row");
    assert_eq!(rows.len(), 3);
    assert!(rows[0].contains("Ada"));
    assert!(rows[1].contains("Mia"));
    assert!(rows[2].contains("Zed"));
}

#[tokio::test]
async fn test_showtimes_listed_by_date_then_time_with_labels() {
    let app = TestApp::new().await;
    let heat = app.seed_movie("Heat", "Crime", 170).await;
    let up = app.seed_movie("Up", "Animation", 96).await;
    let one = app.seed_screen(1, 100).await;
    let two = app.seed_screen(2, 60).await;
    app.seed_showtime(heat, one, "2024-01-02", "10:00").await;
    app.seed_showtime(up, two, "2024-01-01", "21:00").await;
    app.seed_showtime(heat, two, "2024-01-01", "18:00").await;

    let res = app.client.get(&app.url("/Showtimes")).await;
    assert_eq!(res.status, 200);

    let rows = res.rows("showtime-row");
    assert_eq!(rows.len(), 3);
    assert!(rows[0].contains("<td>2024-01-01</td>") && rows[0].contains("<td>18:00</td>"));
    assert!(rows[1].contains("<td>2024-01-01</td>") && rows[1].contains("<td>21:00</td>"));
    assert!(rows[2].contains("<td>2024-01-02</td>") && rows[2].contains("<td>10:00</td>"));

    // Every row carries its joined movie title and screen number.
    assert!(rows[0].contains("<td>Heat</td>") && rows[0].contains("<td>2</td>"));
    assert!(rows[1].contains("<td>Up</td>") && rows[1].contains("<td>2</td>"));
    assert!(rows[2].contains("<td>Heat</td>") && rows[2].contains("<td>1</td>"));
}

// ═══ Edit forms ═══

#[tokio::test]
async fn test_edit_showtime_lists_every_movie_and_screen() {
    let app = TestApp::new().await;
    for i in 0..120 {
        app.seed_movie(&format!("Feature {i:03}"), "Drama", 90).await;
    }
    for n in 1..=30 {
        app.seed_screen(n, 50 + n).await;
    }

    let res = app.client.get(&app.url("/EditShowtime")).await;
    assert_eq!(res.status, 200);

    for i in 0..120 {
        let option = format!(">Feature {i:03}</option>");
        assert!(res.body.contains(&option), "missing {option}");
    }
    assert_eq!(res.body.matches("name=\"screenID\"").count(), 1);
    for n in 1..=30 {
        let option = format!(">Screen {n} (");
        assert!(res.body.contains(&option), "missing screen {n}");
    }
}

#[tokio::test]
async fn test_edit_ticket_renders_blank_form_with_dropdowns() {
    let app = TestApp::new().await;
    let movie = app.seed_movie("Arrival", "Sci-Fi", 116).await;
    let screen = app.seed_screen(4, 90).await;
    app.seed_showtime(movie, screen, "2024-03-05", "20:15").await;
    app.seed_customer("Lin", "lin@example.com").await;

    let res = app.client.get(&app.url("/EditTicket")).await;
    assert_eq!(res.status, 200);
    assert!(res.body.contains("id=\"edit-ticket\""));
    assert!(res.body.contains(">Arrival - 2024-03-05 20:15</option>"));
    assert!(res.body.contains(">Lin</option>"));
}

#[tokio::test]
async fn test_static_pages_render() {
    let app = TestApp::new().await;
    for path in ["/", "/EditScreen", "/EditCustomer"] {
        let res = app.client.get(&app.url(path)).await;
        assert_eq!(res.status, 200, "{path}");
        assert!(
            res.content_type.as_deref().unwrap_or_default().starts_with("text/html"),
            "{path}"
        );
    }
}

#[tokio::test]
async fn test_empty_database_renders_empty_lists() {
    let app = TestApp::new().await;
    for path in [
        "/Movies",
        "/Screens",
        "/Customers",
        "/Showtimes",
        "/Tickets",
        "/EditShowtime",
        "/EditTicket",
    ] {
        let res = app.client.get(&app.url(path)).await;
        assert_eq!(res.status, 200, "{path}: {}", res.body);
    }
}

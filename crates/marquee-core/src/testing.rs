use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use sea_orm::sea_query::{Query, SimpleExpr};
use sea_orm::{ConnectionTrait, DatabaseConnection};
use tokio::net::TcpListener;

use crate::App;
use crate::config::Config;
use crate::schema::{Customers, Movies, Screens, Showtimes, Tickets};
use crate::templates::Templates;

/// A test application builder for integration testing.
///
/// Spins up the full router on a random local port, backed by a fresh,
/// migrated SQLite file database.
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn lists_movies() {
///     let app = TestApp::new().await;
///     app.seed_movie("Inception", "Sci-Fi", 148).await;
///     let res = app.client.get(&app.url("/Movies")).await;
///     assert_eq!(res.status, 200);
/// }
/// ```
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: TestClient,
    pub db: Arc<DatabaseConnection>,
    pub config: Config,
    db_file: Option<PathBuf>,
}

impl TestApp {
    /// Create a new test app with an empty, migrated database.
    pub async fn new() -> Self {
        let (app, db_file) = Self::migrated_app().await;
        let mut test_app = Self::spawn(app).await;
        test_app.db_file = Some(db_file);
        test_app
    }

    /// Create a test app whose store cannot be opened.
    ///
    /// The pool is lazy, so startup succeeds and every query fails.
    pub async fn with_unreachable_store() -> Self {
        let config = Self::test_config(
            "sqlite:///nonexistent-marquee-dir/missing.db?mode=ro".to_string(),
        );
        let app = App::with_config(config)
            .await
            .expect("Failed to create test app");
        Self::spawn(app).await
    }

    /// Create a test app with a healthy database but custom templates.
    pub async fn with_templates(templates: Templates) -> Self {
        let (mut app, db_file) = Self::migrated_app().await;
        app.templates = templates;
        let mut test_app = Self::spawn(app).await;
        test_app.db_file = Some(db_file);
        test_app
    }

    async fn migrated_app() -> (App, PathBuf) {
        let db_file =
            std::env::temp_dir().join(format!("marquee-test-{}.db", uuid::Uuid::new_v4()));
        let config = Self::test_config(format!("sqlite://{}?mode=rwc", db_file.display()));

        let app = App::with_config(config)
            .await
            .expect("Failed to create test app");
        app.run_migrations()
            .await
            .expect("Failed to run migrations");
        (app, db_file)
    }

    /// Serve an already-built application in the background.
    pub async fn spawn(app: App) -> Self {
        let router = app.router();
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test server");
        let addr = listener.local_addr().expect("Failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        TestApp {
            addr,
            client: TestClient::new(),
            db: app.db,
            config: app.config,
            db_file: None,
        }
    }

    fn test_config(database_url: String) -> Config {
        Config {
            database_url,
            server_host: "127.0.0.1".to_string(),
            server_port: 0, // OS assigns a random port
            environment: "test".to_string(),
            static_dir: std::env::temp_dir()
                .join("marquee-test-static")
                .display()
                .to_string(),
            ..Config::default()
        }
    }

    /// Get the full URL for a path on the test server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    // ── Seeding ──

    pub async fn seed_movie(&self, title: &str, genre: &str, duration: i32) -> i32 {
        self.insert(
            Query::insert()
                .into_table(Movies::Table)
                .columns([Movies::Title, Movies::Genre, Movies::Duration])
                .values_panic([title.into(), genre.into(), duration.into()])
                .to_owned(),
        )
        .await
    }

    pub async fn seed_screen(&self, screen_number: i32, seating_capacity: i32) -> i32 {
        self.insert(
            Query::insert()
                .into_table(Screens::Table)
                .columns([Screens::ScreenNumber, Screens::SeatingCapacity])
                .values_panic([screen_number.into(), seating_capacity.into()])
                .to_owned(),
        )
        .await
    }

    pub async fn seed_customer(&self, name: &str, email: &str) -> i32 {
        self.insert(
            Query::insert()
                .into_table(Customers::Table)
                .columns([Customers::Name, Customers::Email])
                .values_panic([name.into(), email.into()])
                .to_owned(),
        )
        .await
    }

    /// Dates and times are stored as the given text (`2024-01-01`, `18:00`).
    pub async fn seed_showtime(
        &self,
        movie_id: i32,
        screen_id: i32,
        show_date: &str,
        start_time: &str,
    ) -> i32 {
        self.insert(
            Query::insert()
                .into_table(Showtimes::Table)
                .columns([
                    Showtimes::ShowDate,
                    Showtimes::StartTime,
                    Showtimes::MovieId,
                    Showtimes::ScreenId,
                ])
                .values_panic([
                    show_date.into(),
                    start_time.into(),
                    movie_id.into(),
                    screen_id.into(),
                ])
                .to_owned(),
        )
        .await
    }

    pub async fn seed_ticket(
        &self,
        showtime_id: i32,
        customer_id: i32,
        purchase_date: &str,
        ticket_price: f64,
    ) -> i32 {
        self.insert(
            Query::insert()
                .into_table(Tickets::Table)
                .columns([
                    Tickets::PurchaseDate,
                    Tickets::TicketPrice,
                    Tickets::ShowtimeId,
                    Tickets::CustomerId,
                ])
                .values_panic([
                    SimpleExpr::from(purchase_date),
                    ticket_price.into(),
                    showtime_id.into(),
                    customer_id.into(),
                ])
                .to_owned(),
        )
        .await
    }

    async fn insert(&self, insert: sea_orm::sea_query::InsertStatement) -> i32 {
        let stmt = self.db.get_database_backend().build(&insert);
        let res = self.db.execute(stmt).await.expect("Failed to seed row");
        res.last_insert_id() as i32
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(path) = self.db_file.take() {
            let _ = std::fs::remove_file(&path);
            for suffix in ["-wal", "-shm"] {
                let mut side = path.clone().into_os_string();
                side.push(suffix);
                let _ = std::fs::remove_file(side);
            }
        }
    }
}

/// A simple HTTP test client with helper methods.
#[derive(Clone, Default)]
pub struct TestClient {
    inner: reqwest::Client,
}

impl TestClient {
    pub fn new() -> Self {
        TestClient {
            inner: reqwest::Client::new(),
        }
    }

    /// Send a GET request.
    pub async fn get(&self, url: &str) -> TestResponse {
        let res = self
            .inner
            .get(url)
            .send()
            .await
            .expect("GET request failed");
        TestResponse::from_response(res).await
    }
}

/// A simplified HTTP response for test assertions.
#[derive(Debug)]
pub struct TestResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let content_type = res
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = res.text().await.unwrap_or_default();
        TestResponse {
            status,
            content_type,
            body,
        }
    }

    /// Rows of the page's table, as the text of each `<tr class="...">` element.
    pub fn rows(&self, class: &str) -> Vec<String> {
        let marker = format!("<tr class=\"{class}\">");
        self.body
            .split(&marker)
            .skip(1)
            .map(|chunk| chunk.split("</tr>").next().unwrap_or_default().to_string())
            .collect()
    }
}

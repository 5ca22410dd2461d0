//! Static product overview.

use leptos::prelude::*;

const FEATURES: [(&str, &str); 6] = [
    ("Real-time Detection", "Continuous monitoring with instant anomaly detection"),
    ("Multi-Camera Support", "Monitor multiple camera feeds simultaneously"),
    ("Evidence Collection", "Automatic video clip saving for incidents"),
    ("Email Alerts", "Instant notifications with video attachments"),
    ("Web Dashboard", "Modern web interface for monitoring and management"),
    ("Secure Authentication", "JWT-based user authentication and authorization"),
];

const CONSOLE_STACK: [&str; 4] = [
    "Leptos with server-side rendering and hydration",
    "Rust compiled to WebAssembly",
    "axum host for the console shell",
    "Browser media APIs for webcam capture",
];

const BACKEND_STACK: [&str; 5] = [
    "FastAPI with Python",
    "PyTorch for deep learning",
    "OpenCV for video processing",
    "SQLAlchemy for database",
    "JWT for authentication",
];

const MODEL_NOTES: [(&str, &str); 3] = [
    ("R3D-18 Architecture", "3D ResNet model for video action recognition"),
    ("Multi-Class Detection", "Detects various types of violence and anomalies"),
    ("Real-time Processing", "Optimized for low-latency video analysis"),
];

const DATASETS: [(&str, &str); 2] = [
    ("UCF-Crime Dataset", "Large-scale dataset with 13 crime categories"),
    ("RWF-2000 Dataset", "Real-world fight detection dataset"),
];

fn feature_items(items: &'static [(&'static str, &'static str)]) -> impl IntoView {
    items
        .iter()
        .map(|(title, text)| {
            view! {
                <div class="feature-item">
                    <h3>{*title}</h3>
                    <p>{*text}</p>
                </div>
            }
        })
        .collect::<Vec<_>>()
}

fn bullet_list(items: &'static [&'static str]) -> impl IntoView {
    view! { <ul>{items.iter().map(|item| view! { <li>{*item}</li> }).collect::<Vec<_>>()}</ul> }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page-container about-page">
            <h2>"About Argus Core"</h2>

            <div class="card">
                <h3>"Overview"</h3>
                <p>
                    "Argus Core is an automated surveillance system for real-time fight and violence detection "
                    "in CCTV footage. It provides continuous monitoring with instant alerts and evidence collection."
                </p>
            </div>

            <div class="card">
                <h3>"Key Features"</h3>
                <div class="features-grid">{feature_items(&FEATURES)}</div>
            </div>

            <div class="card">
                <h3>"Technology Stack"</h3>
                <div class="tech-stack-grid">
                    <div>
                        <h4>"Console"</h4>
                        {bullet_list(&CONSOLE_STACK)}
                    </div>
                    <div>
                        <h4>"Backend & ML"</h4>
                        {bullet_list(&BACKEND_STACK)}
                    </div>
                </div>
            </div>

            <div class="card">
                <h3>"Machine Learning"</h3>
                <p>"Anomaly detection runs on deep learning models hosted by the backend:"</p>
                <div class="features-grid">{feature_items(&MODEL_NOTES)}</div>
            </div>

            <div class="card">
                <h3>"Training Data"</h3>
                <div class="features-grid">{feature_items(&DATASETS)}</div>
            </div>

            <div class="card disclaimer">
                <h3>"Important Notice"</h3>
                <p>
                    "This system is designed for educational and research purposes. Ensure compliance with local "
                    "privacy laws before deploying it, and obtain the necessary permissions before monitoring "
                    "public or private spaces."
                </p>
            </div>
        </div>
    }
}

use axum::response::Html;

// Protected landing page, only reachable through the gate.
pub async fn index() -> Html<&'static str> {
    Html("<!DOCTYPE html><html><body><p>Access granted.</p></body></html>")
}

//! HTTP surface: the dashboard page and the JSON status endpoint.

use axum::{extract::State, response::Html, Json};

use crate::snapshot::collect_snapshot;
use crate::state::AppState;
use crate::types::StatusSnapshot;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(DASHBOARD.replace("{hostname}", &state.hostname))
}

pub async fn api_status(State(state): State<AppState>) -> Json<StatusSnapshot> {
    Json(collect_snapshot(&state.sources).await)
}

const DASHBOARD: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width,initial-scale=1" />
    <title>{hostname} system status</title>
    <style>
      body { font-family: system-ui, -apple-system, Roboto, Arial; margin: 2rem; }
      .card { border: 1px solid #ddd; padding: 1rem; border-radius: 8px; max-width: 480px }
      .row { display:flex; justify-content:space-between; margin:0.5rem 0 }
      .muted { color: #666 }
    </style>
  </head>
  <body>
    <h1>{hostname} system status</h1>
    <div class="card">
      <div class="row"><div class="muted">CPU Temp</div><div id="cpu_temp">--</div></div>
      <div class="row"><div class="muted">RAM Used</div><div id="ram_used">--</div></div>
      <div class="row"><div class="muted">RAM Free</div><div id="ram_free">--</div></div>
      <div class="row"><div class="muted">Uptime</div><div id="uptime">--</div></div>
      <div class="row"><div class="muted">Last Updated</div><div id="updated">--</div></div>
    </div>

    <script>
      async function fetchStatus(){
        try{
          const r = await fetch('/api/status');
          const j = await r.json();
          document.getElementById('cpu_temp').textContent =
            j.cpu_temp_c === null ? 'N/A' : j.cpu_temp_c.toFixed(1) + ' °C';
          document.getElementById('ram_used').textContent =
            j.mem_used_mb + ' MB (' + j.mem_percent_used + '%)';
          document.getElementById('ram_free').textContent = j.mem_free_mb + ' MB';
          document.getElementById('uptime').textContent = j.uptime_human || '--';
          document.getElementById('updated').textContent =
            new Date(j.timestamp).toLocaleString();
        }catch(e){
          console.error(e);
        }
      }
      fetchStatus();
      setInterval(fetchStatus, 5000);
    </script>
  </body>
</html>
"#;

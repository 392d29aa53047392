use crate::model::ReportData;

const DATA_PLACEHOLDER: &str = "__DATA__";

/// Render a self-contained HTML report (data embedded as JSON).
///
/// Important: we avoid `format!()` because the HTML contains many `{}` from JS
/// template literals (e.g., `${x}`), which would conflict with Rust formatting.
pub fn render_html_report(data: &ReportData) -> anyhow::Result<String> {
    // "</" would let a process name close the script element early.
    let json = serde_json::to_string(data)?.replace("</", "<\\/");

    const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Process Monitor Charts</title>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0; }
  header { padding: 12px 16px; border-bottom: 1px solid #ddd; }
  .container { display: flex; height: calc(100vh - 58px); }
  .sidebar { width: 300px; border-right: 1px solid #ddd; padding: 12px; overflow: auto; }
  .main { flex: 1; padding: 12px; overflow: auto; }

  .summary { display: flex; gap: 16px; flex-wrap: wrap; font-size: 14px; color: #333; }
  .pill { padding: 4px 8px; border: 1px solid #ddd; border-radius: 999px; background: #fafafa; }

  .file { cursor: pointer; user-select: none; padding: 4px 6px; border-radius: 4px; }
  .file:hover { background: #f3f3f3; }
  .file.selected { background: #e9f2ff; border: 1px solid #cfe3ff; }
  .muted { color: #777; font-size: 12px; }

  .charts { display: grid; grid-template-columns: repeat(auto-fill, minmax(520px, 1fr)); gap: 16px; }
  .chart { border: 1px solid #eee; border-radius: 8px; padding: 8px; }
  .chart h3 { margin: 0 0 4px 0; font-size: 15px; }
  .chart svg { width: 100%; height: auto; }
  .chart .axis { stroke: #999; stroke-width: 1; }
  .chart .grid { stroke: #eee; stroke-width: 1; }
  .chart .line { fill: none; stroke: #2f6fdb; stroke-width: 1.5; }
  .chart text { font-size: 11px; fill: #555; }
  .stats { font-size: 12px; color: #555; font-variant-numeric: tabular-nums; }
  code { font-family: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace; font-size: 13px; }
</style>
</head>
<body>
<header>
  <div class="summary" id="summary"></div>
</header>

<div class="container">
  <div class="sidebar">
    <div id="files"></div>
  </div>

  <div class="main">
    <h2 id="title">No log files</h2>
    <div id="meta" class="muted"></div>
    <div class="charts" id="charts"></div>
  </div>
</div>

<script>
// Embedded report data (JSON object literal)
const DATA = __DATA__;

const W = 560, H = 300;
const PAD = { left: 64, right: 16, top: 12, bottom: 44 };

const state = { selected: null };

function fmt(x) {
  if (x === null || x === undefined) return "-";
  if (Math.abs(x) >= 1000 || Number.isInteger(x)) return String(Math.round(x * 100) / 100);
  return x.toFixed(3);
}

function escapeHtml(s) {
  return String(s)
    .replaceAll("&", "&amp;")
    .replaceAll("<", "&lt;")
    .replaceAll(">", "&gt;")
    .replaceAll('"', "&quot;")
    .replaceAll("'", "&#39;");
}

function renderSummary() {
  const t = DATA.totals;
  document.getElementById("summary").innerHTML = `
    <span class="pill">files: <b>${t.files}</b></span>
    <span class="pill">samples: <b>${t.samples}</b></span>
  `;
}

function ticks(lo, hi, n) {
  const out = [];
  for (let i = 0; i <= n; i++) out.push(lo + (hi - lo) * i / n);
  return out;
}

function lineChart(chart) {
  const pts = chart.points.filter(p => p[0] !== null && p[1] !== null);
  let x0 = Infinity, x1 = -Infinity, y0 = Infinity, y1 = -Infinity;
  for (const [x, y] of pts) {
    x0 = Math.min(x0, x); x1 = Math.max(x1, x);
    y0 = Math.min(y0, y); y1 = Math.max(y1, y);
  }
  if (!pts.length) { x0 = 0; x1 = 1; y0 = 0; y1 = 1; }
  if (x0 === x1) { x1 = x0 + 1; }
  if (y0 === y1) { y0 = y0 - 1; y1 = y1 + 1; }

  const iw = W - PAD.left - PAD.right;
  const ih = H - PAD.top - PAD.bottom;
  const sx = x => PAD.left + (x - x0) / (x1 - x0) * iw;
  const sy = y => PAD.top + ih - (y - y0) / (y1 - y0) * ih;

  let svg = `<svg viewBox="0 0 ${W} ${H}" xmlns="http://www.w3.org/2000/svg">`;
  for (const y of ticks(y0, y1, 4)) {
    svg += `<line class="grid" x1="${PAD.left}" x2="${W - PAD.right}" y1="${sy(y)}" y2="${sy(y)}"/>`;
    svg += `<text x="${PAD.left - 6}" y="${sy(y) + 4}" text-anchor="end">${fmt(y)}</text>`;
  }
  for (const x of ticks(x0, x1, 5)) {
    svg += `<text x="${sx(x)}" y="${H - PAD.bottom + 16}" text-anchor="middle">${fmt(x)}</text>`;
  }
  svg += `<line class="axis" x1="${PAD.left}" x2="${PAD.left}" y1="${PAD.top}" y2="${PAD.top + ih}"/>`;
  svg += `<line class="axis" x1="${PAD.left}" x2="${W - PAD.right}" y1="${PAD.top + ih}" y2="${PAD.top + ih}"/>`;
  if (pts.length) {
    const d = pts.map(([x, y]) => `${sx(x).toFixed(1)},${sy(y).toFixed(1)}`).join(" ");
    svg += `<polyline class="line" points="${d}"/>`;
  }
  svg += `<text x="${PAD.left + iw / 2}" y="${H - 6}" text-anchor="middle">${escapeHtml(chart.x_label)}</text>`;
  svg += `<text transform="translate(14 ${PAD.top + ih / 2}) rotate(-90)" text-anchor="middle">${escapeHtml(chart.y_label)}</text>`;
  svg += `</svg>`;
  return svg;
}

function renderFiles() {
  const root = document.getElementById("files");
  root.innerHTML = "";
  DATA.files.forEach((file, idx) => {
    const row = document.createElement("div");
    row.className = "file" + (state.selected === idx ? " selected" : "");
    row.onclick = () => selectFile(idx);
    row.innerHTML = `${escapeHtml(file.label)} <span class="muted">(${file.samples} samples)</span>`;
    root.appendChild(row);
  });
}

function selectFile(idx) {
  state.selected = idx;
  const file = DATA.files[idx];
  document.getElementById("title").textContent = file.label;
  document.getElementById("meta").innerHTML =
    `<code>${escapeHtml(file.path)}</code> | pid: ${escapeHtml(file.pid ?? "-")} | process: ${escapeHtml(file.process_name ?? "-")}`;

  const charts = document.getElementById("charts");
  charts.innerHTML = "";
  for (const chart of file.charts) {
    const box = document.createElement("div");
    box.className = "chart";
    const s = chart.stats;
    const stats = s
      ? `min ${fmt(s.min)} | max ${fmt(s.max)} | mean ${fmt(s.mean)} | last ${fmt(s.last)}`
      : "no samples";
    box.innerHTML = `<h3>${escapeHtml(chart.title)}</h3>${lineChart(chart)}<div class="stats">${stats}</div>`;
    charts.appendChild(box);
  }

  renderFiles();
}

renderSummary();
renderFiles();
if (DATA.files.length) selectFile(0);
</script>
</body>
</html>
"#;

    Ok(TEMPLATE.replace(DATA_PLACEHOLDER, &json))
}

pub const INDEX_HTML: &str = r##"<!doctype html>
<html lang="en">

<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>GeoJSON Compare</title>
  <style>
    html, body { height: 100%; margin: 0; font-family: system-ui, sans-serif; background: #f9fafb; }
    .wrap { display: flex; align-items: center; justify-content: center; min-height: 100%; }
    .inner { text-align: center; }
    h1 { margin: 0 0 1rem; font-size: 2.25rem; color: #111827; }
    p { margin: 0 0 2rem; color: #4b5563; }
    code { background: #e5e7eb; padding: 0.15rem 0.4rem; border-radius: 0.25rem; }
    .card { background: #fff; padding: 1.5rem; border-radius: 0.5rem; box-shadow: 0 1px 4px rgba(0,0,0,0.1); max-width: 28rem; margin: 0 auto; }
    .card p { margin: 0 0 0.5rem; font-size: 0.875rem; }
    .card input { padding: 0.4rem 0.6rem; border: 1px solid #d1d5db; border-radius: 0.25rem; width: 60%; }
    .card button { padding: 0.4rem 0.8rem; border: none; border-radius: 0.25rem; background: #3b82f6; color: #fff; cursor: pointer; }
  </style>
</head>

<body>
  <div class="wrap">
    <div class="inner">
      <h1>GeoJSON Compare</h1>
      <p>Navigate to <code>/compare/&lt;uuid&gt;</code> to view geometry comparisons</p>
      <div class="card">
        <p>Or enter a UUID:</p>
        <form id="compare-form">
          <input id="uuid" placeholder="your-uuid-here" />
          <button type="submit">Compare</button>
        </form>
      </div>
    </div>
  </div>
  <script>
    document.getElementById('compare-form').addEventListener('submit', function (event) {
      event.preventDefault();
      var uuid = document.getElementById('uuid').value.trim();
      if (uuid) {
        window.location.href = '/compare/' + encodeURIComponent(uuid);
      }
    });
  </script>
</body>

</html>
"##;

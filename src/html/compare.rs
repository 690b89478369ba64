pub const COMPARE_HTML: &str = r##"<!doctype html>
<html lang="en">

<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>GeoJSON Comparison</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
  <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
  <style>
    html, body { height: 100%; margin: 0; font-family: system-ui, sans-serif; }
    .page { display: flex; flex-direction: column; height: 100%; }
    header { background: #fff; border-bottom: 1px solid #e5e7eb; padding: 1rem 1.5rem; box-shadow: 0 1px 2px rgba(0,0,0,0.05); }
    header h1 { margin: 0; font-size: 1.5rem; color: #111827; }
    header p { margin: 0.25rem 0 0; font-size: 0.875rem; color: #4b5563; }
    #map { flex: 1; }
    .notice { display: flex; align-items: center; justify-content: center; height: 100%; color: #4b5563; }
    .notice.error { color: #dc2626; font-weight: 600; }
    .legend { background: #fff; padding: 0.75rem; border-radius: 0.25rem; box-shadow: 0 1px 4px rgba(0,0,0,0.3); font-size: 0.75rem; }
    .legend .title { font-weight: 600; margin-bottom: 0.5rem; }
    .legend .row { display: flex; align-items: center; margin-bottom: 0.25rem; }
    .legend .swatch { width: 1rem; height: 1rem; margin-right: 0.5rem; border: 1px solid; }
  </style>
</head>

<body>
  <div class="page">
    <header>
      <h1>GeoJSON Comparison</h1>
      <p id="uuid-label"></p>
    </header>
    <div id="map">
      <div class="notice">Loading geometries...</div>
    </div>
  </div>
  <script>
    (function () {
      var uuid = decodeURIComponent(window.location.pathname.split('/').pop());
      document.getElementById('uuid-label').textContent = 'UUID: ' + uuid;

      var map = null;
      var oldLayer = null;
      var newLayer = null;
      var legend = null;

      function showMessage(text, isError) {
        var container = document.getElementById('map');
        if (map) {
          map.remove();
          map = null;
          oldLayer = null;
          newLayer = null;
          legend = null;
        }
        container.innerHTML = '';
        var notice = document.createElement('div');
        notice.className = 'notice' + (isError ? ' error' : '');
        notice.textContent = text;
        container.appendChild(notice);
      }

      function layerStyle(color) {
        return { color: color, weight: 3, opacity: 0.8, fillColor: color, fillOpacity: 0.3 };
      }

      function render(data) {
        if (!map) {
          document.getElementById('map').innerHTML = '';
          map = L.map('map').setView([20.5937, 78.9629], 5);
          L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
            attribution: '&copy; OpenStreetMap contributors',
            maxZoom: 19
          }).addTo(map);
        }

        // remove stale overlays and legend before adding new ones
        if (oldLayer) { map.removeLayer(oldLayer); oldLayer = null; }
        if (newLayer) { map.removeLayer(newLayer); newLayer = null; }
        if (legend) { map.removeControl(legend); legend = null; }

        if (data.oldGeojson) {
          oldLayer = L.geoJSON(data.oldGeojson, { style: layerStyle('#ef4444') }).addTo(map);
        }
        if (data.newGeojson) {
          newLayer = L.geoJSON(data.newGeojson, { style: layerStyle('#3b82f6') }).addTo(map);
        }

        var layers = [];
        if (oldLayer) { layers.push(oldLayer); }
        if (newLayer) { layers.push(newLayer); }
        if (layers.length > 0) {
          map.fitBounds(new L.FeatureGroup(layers).getBounds().pad(0.1));
        }

        legend = L.control({ position: 'topright' });
        legend.onAdd = function () {
          var div = L.DomUtil.create('div', 'legend');
          div.innerHTML =
            '<div class="title">Legend</div>' +
            '<div class="row"><div class="swatch" style="background:#ef4444;border-color:#b91c1c"></div>Old Geometry</div>' +
            '<div class="row"><div class="swatch" style="background:#3b82f6;border-color:#1d4ed8"></div>New Geometry</div>';
          return div;
        };
        legend.addTo(map);
      }

      fetch('/api/get-geometries/' + encodeURIComponent(uuid))
        .then(function (response) {
          return response.json().then(function (body) {
            if (!response.ok) {
              throw new Error(body.error || 'Failed to fetch geometries');
            }
            return body;
          });
        })
        .then(render)
        .catch(function (err) {
          showMessage(err.message, true);
        });
    })();
  </script>
</body>

</html>
"##;

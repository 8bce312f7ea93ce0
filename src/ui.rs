use chrono::NaiveDate;

pub fn render_index(today: NaiveDate) -> String {
    INDEX_HTML.replace("{{TODAY}}", &today.format("%Y-%m-%d").to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0, maximum-scale=1.0" />
  <title>Gym Tracker</title>
  <style>
    :root {
      --bg: #f7fafc;
      --ink: #1a202c;
      --muted: #718096;
      --accent: #3182ce;
      --good: #38a169;
      --card: #ffffff;
      --shadow: 0 10px 30px rgba(26, 32, 44, 0.08);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      min-height: calc(var(--vh, 1vh) * 100);
      background: var(--bg);
      color: var(--ink);
      font-family: -apple-system, "Segoe UI", Roboto, sans-serif;
      padding: 20px 14px 40px;
    }

    .app {
      width: min(640px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 18px;
    }

    header h1 {
      margin: 0;
      font-size: 1.8rem;
    }

    header .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
    }

    .tabs, .days, .presets {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    button {
      appearance: none;
      border: 1px solid rgba(26, 32, 44, 0.12);
      background: var(--card);
      color: var(--ink);
      border-radius: 10px;
      padding: 10px 14px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
    }

    button.active {
      background: var(--ink);
      color: white;
    }

    button.primary {
      background: var(--accent);
      border-color: var(--accent);
      color: white;
    }

    .tab-content {
      display: none;
      gap: 14px;
    }

    .tab-content.active {
      display: grid;
    }

    .exercise-item, .card {
      background: var(--card);
      border-radius: 14px;
      padding: 16px;
      box-shadow: var(--shadow);
    }

    .exercise-name {
      margin: 0 0 4px;
      font-size: 1.05rem;
    }

    .exercise-sets {
      margin: 0 0 10px;
      color: var(--muted);
    }

    .exercise-controls {
      display: flex;
      gap: 10px;
      align-items: center;
    }

    .weight-input {
      flex: 1;
      padding: 10px;
      font-size: 16px;
      border: 1px solid rgba(26, 32, 44, 0.2);
      border-radius: 8px;
    }

    .exercise-link {
      color: var(--accent);
      font-weight: 600;
      text-decoration: none;
    }

    .timer-display {
      font-size: 4rem;
      font-weight: 700;
      text-align: center;
      font-variant-numeric: tabular-nums;
    }

    .timer-controls {
      display: flex;
      justify-content: center;
      gap: 10px;
    }

    .stats {
      display: grid;
      grid-template-columns: repeat(3, 1fr);
      gap: 10px;
    }

    .stat .label {
      display: block;
      font-size: 0.75rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: var(--muted);
    }

    .stat .value {
      display: block;
      font-size: 1.4rem;
      font-weight: 700;
    }

    #calendar {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 4px;
    }

    .calendar-header {
      font-weight: 600;
      color: var(--muted);
      font-size: 12px;
      text-align: center;
      padding: 8px;
    }

    .calendar-day {
      text-align: center;
      padding: 8px 0;
      border-radius: 8px;
      background: #edf2f7;
    }

    .calendar-day.today {
      outline: 2px solid var(--ink);
    }

    .calendar-day.workout {
      background: var(--good);
      color: white;
    }

    .banner {
      position: fixed;
      top: 20px;
      left: 50%;
      transform: translateX(-50%);
      background: var(--ink);
      color: white;
      padding: 12px 24px;
      border-radius: 8px;
      z-index: 1000;
      font-weight: 600;
      box-shadow: 0 4px 12px rgba(0, 0, 0, 0.3);
    }

    #notify-btn {
      display: none;
      position: fixed;
      bottom: 20px;
      right: 20px;
      font-size: 12px;
    }

    .status {
      font-size: 0.9rem;
      color: #c53030;
      min-height: 1.2em;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Gym Tracker</h1>
      <p class="subtitle" id="today">{{TODAY}}</p>
    </header>

    <nav class="tabs">
      <button class="tab-btn" type="button" data-tab="routine">Rutina</button>
      <button class="tab-btn" type="button" data-tab="timer">Descanso</button>
      <button class="tab-btn" type="button" data-tab="consistency">Constancia</button>
    </nav>

    <section id="routine" class="tab-content">
      <div class="days" id="days"></div>
      <div id="exercises" class="exercise-list"></div>
    </section>

    <section id="timer" class="tab-content">
      <div class="presets" id="presets"></div>
      <div class="card">
        <div class="timer-display"><span id="timer-minutes">01</span>:<span id="timer-seconds">30</span></div>
        <div class="timer-controls">
          <button class="primary" type="button" id="start-timer">Iniciar</button>
          <button type="button" id="pause-timer">Pausar</button>
          <button type="button" id="reset-timer">Reiniciar</button>
        </div>
      </div>
    </section>

    <section id="consistency" class="tab-content">
      <div class="stats">
        <div class="card stat"><span class="label">Semana</span><span class="value" id="week-workouts">0/5</span></div>
        <div class="card stat"><span class="label">Mes</span><span class="value" id="month-workouts">0</span></div>
        <div class="card stat"><span class="label">Racha</span><span class="value" id="current-streak">0 días</span></div>
      </div>
      <div class="card"><div id="calendar"></div></div>
      <button class="primary" type="button" id="mark-workout">Marcar entrenamiento de hoy</button>
    </section>

    <div class="status" id="status"></div>
  </main>

  <button type="button" id="notify-btn">Habilitar notificaciones</button>

  <script>
    const $ = (id) => document.getElementById(id);
    let view = null;
    let lastAlertId = null;
    let pollHandle = null;
    let weightQueue = Promise.resolve();
    let lastWeightSeq = 0;

    const setStatus = (message) => {
      $('status').textContent = message || '';
    };

    const send = async (command) => {
      const res = await fetch('/api/command', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(command)
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      render(await res.json());
    };

    const dispatch = (command) => {
      send(command).catch((err) => setStatus(err.message));
    };

    // Weight edits go out one at a time, each tagged with a rising sequence
    // number so the server can drop anything older than what it has seen.
    const sendWeight = (key, value) => {
      lastWeightSeq = Math.max(Date.now(), lastWeightSeq + 1);
      const command = { action: 'set_weight', key, value, seq: lastWeightSeq };
      weightQueue = weightQueue
        .then(() => send(command))
        .catch((err) => setStatus(err.message));
    };

    const loadState = async () => {
      const res = await fetch('/api/state');
      if (!res.ok) {
        throw new Error('Unable to load state');
      }
      render(await res.json());
    };

    const showAlert = (alert) => {
      if (alert.kind.type === 'native' && 'Notification' in window) {
        new Notification(alert.message);
        return;
      }
      const banner = document.createElement('div');
      banner.className = 'banner';
      banner.textContent = alert.message;
      document.body.appendChild(banner);
      if (navigator.vibrate) {
        navigator.vibrate(alert.kind.vibrate);
      }
      setTimeout(() => banner.remove(), alert.kind.dismiss_after_ms);
    };

    const renderTabs = () => {
      document.querySelectorAll('.tab-btn').forEach((btn) => {
        btn.classList.toggle('active', btn.dataset.tab === view.tab);
      });
      document.querySelectorAll('section.tab-content').forEach((section) => {
        section.classList.toggle('active', section.id === view.tab);
      });
    };

    const renderRoutine = () => {
      const days = $('days');
      days.innerHTML = '';
      view.days.forEach((day) => {
        const btn = document.createElement('button');
        btn.type = 'button';
        btn.className = 'day-btn' + (day === view.day ? ' active' : '');
        btn.textContent = `Día ${day}`;
        btn.addEventListener('click', () => dispatch({ action: 'select_day', day }));
        days.appendChild(btn);
      });

      const container = $('exercises');
      const focused = document.activeElement && document.activeElement.dataset
        ? document.activeElement.dataset.exercise
        : null;
      if (focused) {
        return;
      }
      container.innerHTML = '';
      view.exercises.forEach((exercise) => {
        const item = document.createElement('div');
        item.className = 'exercise-item';

        const name = document.createElement('h3');
        name.className = 'exercise-name';
        name.textContent = exercise.name;

        const sets = document.createElement('p');
        sets.className = 'exercise-sets';
        sets.textContent = exercise.sets;

        const controls = document.createElement('div');
        controls.className = 'exercise-controls';

        const input = document.createElement('input');
        input.type = 'number';
        input.className = 'weight-input';
        input.placeholder = 'Peso (kg)';
        input.step = '0.5';
        input.min = '0';
        input.value = exercise.weight;
        input.dataset.exercise = exercise.key;
        input.addEventListener('input', (event) => {
          sendWeight(exercise.key, event.target.value);
        });
        input.addEventListener('focus', (event) => {
          event.target.scrollIntoView({ behavior: 'smooth', block: 'center' });
        });
        input.addEventListener('blur', () => {
          setTimeout(() => window.scrollTo(0, 0), 100);
        });

        const link = document.createElement('a');
        link.className = 'exercise-link';
        link.href = exercise.video;
        link.target = '_blank';
        link.rel = 'noopener';
        link.textContent = 'Ver video';

        controls.append(input, link);
        item.append(name, sets, controls);
        container.appendChild(item);
      });
    };

    const renderTimer = () => {
      $('timer-minutes').textContent = view.timer.minutes;
      $('timer-seconds').textContent = view.timer.seconds;

      const presets = $('presets');
      presets.innerHTML = '';
      view.timer.presets.forEach((seconds) => {
        const btn = document.createElement('button');
        btn.type = 'button';
        btn.className = 'preset-btn' + (seconds === view.timer.preset ? ' active' : '');
        btn.textContent = seconds % 60 === 0 ? `${seconds / 60} min` : `${seconds}s`;
        btn.addEventListener('click', () => dispatch({ action: 'select_preset', seconds }));
        presets.appendChild(btn);
      });

      if (view.timer.running && !pollHandle) {
        pollHandle = setInterval(() => loadState().catch((err) => setStatus(err.message)), 1000);
      } else if (!view.timer.running && pollHandle) {
        clearInterval(pollHandle);
        pollHandle = null;
      }
    };

    const renderConsistency = () => {
      $('week-workouts').textContent = view.stats.week_label;
      $('month-workouts').textContent = view.stats.month;
      $('current-streak').textContent = view.stats.streak_label;

      const calendar = $('calendar');
      calendar.innerHTML = '';
      view.weekday_headers.forEach((label) => {
        const header = document.createElement('div');
        header.className = 'calendar-header';
        header.textContent = label;
        calendar.appendChild(header);
      });
      view.calendar.forEach((cell) => {
        const day = document.createElement('div');
        day.className = 'calendar-day';
        day.textContent = cell.day;
        day.classList.toggle('today', cell.today);
        day.classList.toggle('workout', cell.workout);
        calendar.appendChild(day);
      });
    };

    const render = (next) => {
      view = next;
      $('today').textContent = view.today;
      renderTabs();
      renderRoutine();
      renderTimer();
      renderConsistency();

      if (view.alert) {
        if (lastAlertId !== null && view.alert.id !== lastAlertId) {
          showAlert(view.alert);
        }
        lastAlertId = view.alert.id;
      } else if (lastAlertId === null) {
        lastAlertId = 0;
      }
      setStatus('');
    };

    let lastTouchEnd = 0;
    document.addEventListener('touchend', (event) => {
      const now = Date.now();
      if (now - lastTouchEnd <= 300) {
        event.preventDefault();
      }
      lastTouchEnd = now;
    }, false);

    const setViewportHeight = () => {
      document.documentElement.style.setProperty('--vh', `${window.innerHeight * 0.01}px`);
    };
    setViewportHeight();
    window.addEventListener('resize', setViewportHeight);
    window.addEventListener('orientationchange', () => {
      setTimeout(setViewportHeight, 100);
    });

    document.querySelectorAll('.tab-btn').forEach((btn) => {
      btn.addEventListener('click', () => dispatch({ action: 'select_tab', tab: btn.dataset.tab }));
    });
    $('start-timer').addEventListener('click', () => dispatch({ action: 'start_timer' }));
    $('pause-timer').addEventListener('click', () => dispatch({ action: 'pause_timer' }));
    $('reset-timer').addEventListener('click', () => dispatch({ action: 'reset_timer' }));
    $('mark-workout').addEventListener('click', () => dispatch({ action: 'mark_workout' }));

    if ('Notification' in window) {
      const report = () => dispatch({
        action: 'set_notification_permission',
        granted: Notification.permission === 'granted'
      });
      if (Notification.permission === 'default') {
        const notifyBtn = $('notify-btn');
        notifyBtn.style.display = 'block';
        notifyBtn.addEventListener('click', () => {
          Notification.requestPermission().then(report);
          notifyBtn.style.display = 'none';
        });
      }
      report();
    }

    loadState().catch((err) => setStatus(err.message));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_embeds_today() {
        let html = render_index(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert!(html.contains(r#"<p class="subtitle" id="today">2024-01-05</p>"#));
        assert!(!html.contains("{{TODAY}}"));
    }

    #[test]
    fn index_carries_touch_and_viewport_handlers() {
        let html = render_index(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert!(html.contains("addEventListener('touchend'"));
        assert!(html.contains("now - lastTouchEnd <= 300"));
        assert!(html.contains("setProperty('--vh'"));
        assert!(html.contains("addEventListener('orientationchange'"));
        assert!(html.contains("scrollIntoView({ behavior: 'smooth', block: 'center' })"));
        assert!(html.contains("window.scrollTo(0, 0), 100"));
    }

    #[test]
    fn index_serializes_weight_edits() {
        let html = render_index(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert!(html.contains(".then(() => send(command))"));
        assert!(html.contains("seq: lastWeightSeq"));
    }
}

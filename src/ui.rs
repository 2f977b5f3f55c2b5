pub fn render_index() -> String {
    INDEX_HTML.replace("{{PROFILE}}", "piyush")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Internship Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&display=swap');

    :root {
      --bg-1: #f4f6fb;
      --bg-2: #dbe4f7;
      --ink: #21262e;
      --accent: #3b6fe0;
      --accent-2: #2d9a66;
      --danger: #c63b2b;
      --card: #ffffff;
      --shadow: 0 18px 44px rgba(33, 51, 84, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 55%), var(--bg-1);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 28px 16px 48px;
    }

    .shell {
      width: min(1040px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 20px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.6rem, 3.5vw, 2.2rem);
      font-weight: 600;
    }

    .toggle {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(59, 111, 224, 0.12);
      border-radius: 999px;
    }

    .toggle button {
      border: none;
      border-radius: 999px;
      padding: 8px 18px;
      font-weight: 600;
      background: transparent;
      color: #53617a;
      cursor: pointer;
    }

    .toggle button.active {
      background: var(--accent);
      color: white;
    }

    .card {
      background: var(--card);
      border-radius: 18px;
      box-shadow: var(--shadow);
      padding: 22px;
      display: grid;
      gap: 14px;
    }

    .card h2 {
      margin: 0;
      font-size: 1.2rem;
    }

    .banner {
      display: none;
      padding: 10px 14px;
      border-radius: 10px;
      background: #fbe4e0;
      color: var(--danger);
      font-size: 0.95rem;
    }

    .banner.visible {
      display: block;
    }

    form.inline {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    input, textarea {
      font: inherit;
      padding: 9px 12px;
      border: 1px solid rgba(33, 51, 84, 0.22);
      border-radius: 10px;
    }

    input[type="number"] {
      width: 90px;
    }

    button.primary {
      border: none;
      border-radius: 10px;
      padding: 9px 16px;
      font-weight: 600;
      background: var(--accent);
      color: white;
      cursor: pointer;
    }

    button.ghost {
      border: none;
      background: none;
      color: var(--danger);
      cursor: pointer;
      font-size: 0.9rem;
    }

    ul.plain {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 8px;
    }

    ul.plain li {
      display: flex;
      align-items: center;
      gap: 10px;
      padding: 10px 12px;
      border: 1px solid rgba(33, 51, 84, 0.1);
      border-radius: 10px;
    }

    li.done span.text {
      text-decoration: line-through;
      color: #8a93a5;
    }

    li span.text {
      flex: 1;
    }

    .empty {
      color: #79839a;
      text-align: center;
      padding: 16px 0;
    }

    table {
      border-collapse: collapse;
      width: 100%;
      font-size: 0.9rem;
    }

    th, td {
      border: 1px solid rgba(33, 51, 84, 0.14);
      padding: 6px 8px;
      text-align: center;
    }

    th.date, td.date {
      text-align: left;
      white-space: nowrap;
    }

    .metrics {
      display: flex;
      flex-wrap: wrap;
      gap: 14px;
    }

    .metric {
      background: rgba(45, 154, 102, 0.1);
      border-radius: 12px;
      padding: 10px 16px;
    }

    .metric .label {
      display: block;
      font-size: 0.78rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #5d6a80;
    }

    .metric .value {
      font-size: 1.4rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .streaks {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .streaks span {
      background: rgba(59, 111, 224, 0.1);
      border-radius: 999px;
      padding: 6px 12px;
      font-size: 0.85rem;
    }

    .log-meta {
      font-size: 0.85rem;
      color: #5d6a80;
    }
  </style>
</head>
<body>
  <div class="shell">
    <header>
      <h1>Internship Tracker</h1>
      <div class="toggle" id="profile-toggle">
        <button data-profile="piyush">Piyush</button>
        <button data-profile="shruti">Shruti</button>
      </div>
    </header>

    <div class="banner" id="banner"></div>

    <section class="card">
      <h2>Top TODO List</h2>
      <form class="inline" id="todo-form">
        <input type="text" id="todo-content" placeholder="Add new todo" style="flex:1" />
        <button class="primary" type="submit">Add</button>
      </form>
      <ul class="plain" id="todo-list"></ul>
    </section>

    <section class="card">
      <h2>10-Day Habit Tracker</h2>
      <form class="inline" id="habit-form">
        <input type="text" id="habit-name" placeholder="Habit name (e.g., DSA, CP, Reading)" style="flex:1" />
        <button class="primary" type="submit">Add Habit</button>
      </form>
      <div class="metrics">
        <div class="metric">
          <span class="label">Completion</span>
          <span class="value" id="habit-completion">0%</span>
        </div>
      </div>
      <div id="habit-grid"></div>
      <div class="streaks" id="habit-streaks"></div>
    </section>

    <section class="card">
      <h2>Daily Logs</h2>
      <form class="inline" id="log-form"></form>
      <div class="metrics">
        <div class="metric">
          <span class="label">Weekly Total</span>
          <span class="value" id="log-weekly">0</span>
        </div>
        <div class="metric">
          <span class="label">Overall Total</span>
          <span class="value" id="log-overall">0</span>
        </div>
      </div>
      <ul class="plain" id="log-list"></ul>
    </section>
  </div>

  <script>
    let profile = '{{PROFILE}}';

    // Per-view generation counters: responses that arrive after a newer
    // request was issued (e.g. a fast profile switch) are dropped.
    const generations = { todos: 0, habits: 0, logs: 0 };

    const banner = document.getElementById('banner');
    const todoList = document.getElementById('todo-list');
    const habitGrid = document.getElementById('habit-grid');
    const habitStreaks = document.getElementById('habit-streaks');
    const logList = document.getElementById('log-list');
    const logForm = document.getElementById('log-form');

    const showError = (message) => {
      banner.textContent = message;
      banner.classList.add('visible');
    };

    const clearError = () => {
      banner.textContent = '';
      banner.classList.remove('visible');
    };

    const api = async (path, options) => {
      const res = await fetch(path, options);
      let body = null;
      try {
        body = await res.json();
      } catch (err) {
        throw new Error('Request failed');
      }
      if (!body.success) {
        throw new Error(body.error || 'Request failed');
      }
      return body.data;
    };

    const post = (path, payload) => api(path, {
      method: 'POST',
      headers: { 'content-type': 'application/json' },
      body: JSON.stringify(payload)
    });

    const put = (path, payload) => api(path, {
      method: 'PUT',
      headers: { 'content-type': 'application/json' },
      body: JSON.stringify(payload)
    });

    const del = (path) => api(path, { method: 'DELETE' });

    const isoDate = (date) => date.toISOString().split('T')[0];

    const lastTenDays = () => {
      const days = [];
      for (let i = 9; i >= 0; i--) {
        const date = new Date();
        date.setDate(date.getDate() - i);
        days.push(isoDate(date));
      }
      return days;
    };

    const shortDate = (value) =>
      new Date(value).toLocaleDateString('en-US', { month: 'short', day: 'numeric' });

    const refreshTodos = async () => {
      const gen = ++generations.todos;
      const todos = await api(`/api/todos?profile=${profile}`);
      if (gen !== generations.todos) return;

      todoList.innerHTML = '';
      if (!todos.length) {
        todoList.innerHTML = '<li class="empty">No todos yet. Add your first task!</li>';
        return;
      }
      for (const todo of todos) {
        const item = document.createElement('li');
        if (todo.completed) item.classList.add('done');

        const checkbox = document.createElement('input');
        checkbox.type = 'checkbox';
        checkbox.checked = todo.completed;
        checkbox.addEventListener('change', () => {
          put(`/api/todos/${todo.id}`, { completed: !todo.completed })
            .then(refreshTodos)
            .catch((err) => showError(err.message));
        });

        const text = document.createElement('span');
        text.className = 'text';
        text.textContent = todo.content;

        const removeBtn = document.createElement('button');
        removeBtn.className = 'ghost';
        removeBtn.textContent = 'Delete';
        removeBtn.addEventListener('click', () => {
          if (!confirm('Delete this todo?')) return;
          del(`/api/todos/${todo.id}`)
            .then(refreshTodos)
            .catch((err) => showError(err.message));
        });

        item.append(checkbox, text, removeBtn);
        todoList.appendChild(item);
      }
    };

    const refreshHabits = async () => {
      const gen = ++generations.habits;
      const days = lastTenDays();
      const [habits, entries, summary] = await Promise.all([
        api(`/api/habits?profile=${profile}`),
        api(`/api/habit-entries?profile=${profile}&from=${days[0]}&to=${days[days.length - 1]}`),
        api(`/api/summary/habits?profile=${profile}`)
      ]);
      if (gen !== generations.habits) return;

      document.getElementById('habit-completion').textContent =
        `${summary.completion_percent}%`;

      habitStreaks.innerHTML = '';
      for (const streak of summary.streaks) {
        const chip = document.createElement('span');
        chip.textContent = `${streak.name}: ${streak.streak} ${streak.streak === 1 ? 'day' : 'days'}`;
        habitStreaks.appendChild(chip);
      }

      if (!habits.length) {
        habitGrid.innerHTML = '<div class="empty">No habits configured yet.</div>';
        return;
      }

      const completed = (habitId, date) =>
        entries.some((e) => e.habit_id === habitId && e.date === date && e.completed);

      const table = document.createElement('table');
      const head = document.createElement('tr');
      head.innerHTML = '<th class="date">Date</th>';
      for (const habit of habits) {
        const th = document.createElement('th');
        th.textContent = habit.name;

        const removeBtn = document.createElement('button');
        removeBtn.className = 'ghost';
        removeBtn.textContent = 'x';
        removeBtn.title = 'Delete habit';
        removeBtn.addEventListener('click', () => {
          if (!confirm('Delete this habit? All tracking data will be lost.')) return;
          del(`/api/habits/${habit.id}`)
            .then(refreshHabits)
            .catch((err) => showError(err.message));
        });
        th.append(' ', removeBtn);
        head.appendChild(th);
      }
      table.appendChild(head);

      for (const date of days) {
        const row = document.createElement('tr');
        const label = document.createElement('td');
        label.className = 'date';
        label.textContent = shortDate(date);
        row.appendChild(label);

        for (const habit of habits) {
          const cell = document.createElement('td');
          const checkbox = document.createElement('input');
          checkbox.type = 'checkbox';
          checkbox.checked = completed(habit.id, date);
          checkbox.addEventListener('change', () => {
            post('/api/habit-entries/toggle', { habit_id: habit.id, date })
              .then(refreshHabits)
              .catch((err) => showError(err.message));
          });
          cell.appendChild(checkbox);
          row.appendChild(cell);
        }
        table.appendChild(row);
      }

      habitGrid.innerHTML = '';
      habitGrid.appendChild(table);
    };

    const renderLogForm = () => {
      const today = isoDate(new Date());
      if (profile === 'piyush') {
        logForm.innerHTML = `
          <input type="date" name="date" value="${today}" />
          <input type="number" name="striver" min="0" value="0" title="Striver" />
          <input type="number" name="leetcode" min="0" value="0" title="LeetCode" />
          <input type="number" name="codeforces" min="0" value="0" title="Codeforces" />
          <input type="number" name="codechef" min="0" value="0" title="CodeChef" />
          <input type="number" name="others" min="0" value="0" title="Others" />
          <input type="text" name="notes" placeholder="Notes" style="flex:1" />
          <button class="primary" type="submit">Add Entry</button>`;
      } else {
        logForm.innerHTML = `
          <input type="date" name="date" value="${today}" />
          <input type="number" name="python_questions" min="0" value="0" title="Python" />
          <input type="number" name="sql_questions" min="0" value="0" title="SQL" />
          <input type="text" name="notes" placeholder="Notes" style="flex:1" />
          <button class="primary" type="submit">Add Entry</button>`;
      }
    };

    const describeLog = (log) => {
      if (log.profile === 'piyush') {
        return `Total: ${log.total} (striver ${log.striver}, leetcode ${log.leetcode}, ` +
          `codeforces ${log.codeforces}, codechef ${log.codechef}, others ${log.others})`;
      }
      return `Python: ${log.python_questions}, SQL: ${log.sql_questions}`;
    };

    const refreshLogs = async () => {
      const gen = ++generations.logs;
      const [logs, totals] = await Promise.all([
        api(`/api/daily-logs/${profile}`),
        api(`/api/summary/daily-logs/${profile}`)
      ]);
      if (gen !== generations.logs) return;

      document.getElementById('log-weekly').textContent = totals.weekly_total;
      document.getElementById('log-overall').textContent = totals.overall_total;

      logList.innerHTML = '';
      if (!logs.length) {
        logList.innerHTML = '<li class="empty">No daily logs yet. Add your first entry!</li>';
        return;
      }
      for (const log of logs) {
        const item = document.createElement('li');
        const text = document.createElement('span');
        text.className = 'text';
        text.innerHTML = `<strong>${shortDate(log.date)}</strong> — ${describeLog(log)}` +
          (log.notes ? `<span class="log-meta"> · ${log.notes}</span>` : '');

        const removeBtn = document.createElement('button');
        removeBtn.className = 'ghost';
        removeBtn.textContent = 'Delete';
        removeBtn.addEventListener('click', () => {
          if (!confirm('Delete this log?')) return;
          del(`/api/daily-logs/${profile}/${log.id}`)
            .then(refreshLogs)
            .catch((err) => showError(err.message));
        });

        item.append(text, removeBtn);
        logList.appendChild(item);
      }
    };

    const refreshAll = () => {
      clearError();
      renderLogForm();
      Promise.all([refreshTodos(), refreshHabits(), refreshLogs()])
        .catch((err) => showError(err.message));
    };

    const toggle = document.getElementById('profile-toggle');
    const syncToggle = () => {
      for (const button of toggle.querySelectorAll('button')) {
        button.classList.toggle('active', button.dataset.profile === profile);
      }
    };
    toggle.addEventListener('click', (event) => {
      const next = event.target.dataset && event.target.dataset.profile;
      if (!next || next === profile) return;
      profile = next;
      syncToggle();
      refreshAll();
    });

    document.getElementById('todo-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const input = document.getElementById('todo-content');
      if (!input.value.trim()) return;
      post('/api/todos', { profile, content: input.value })
        .then(() => {
          input.value = '';
          return refreshTodos();
        })
        .catch((err) => showError(err.message));
    });

    document.getElementById('habit-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const input = document.getElementById('habit-name');
      if (!input.value.trim()) return;
      post('/api/habits', { profile, name: input.value })
        .then(() => {
          input.value = '';
          return refreshHabits();
        })
        .catch((err) => showError(err.message));
    });

    logForm.addEventListener('submit', (event) => {
      event.preventDefault();
      const fields = new FormData(logForm);
      const payload = { date: fields.get('date') };
      for (const [name, value] of fields.entries()) {
        if (name === 'date') continue;
        if (name === 'notes') {
          payload.notes = value || null;
        } else {
          payload[name] = parseInt(value, 10) || 0;
        }
      }
      post(`/api/daily-logs/${profile}`, payload)
        .then(refreshLogs)
        .catch((err) => showError(err.message));
    });

    syncToggle();
    refreshAll();
  </script>
</body>
</html>
"#;

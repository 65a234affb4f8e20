//! `src/App.{tsx,jsx}` entry component

use crate::answers::Language;

const STYLES: &str = r#"{
  page: {
    minHeight: '100vh',
    display: 'flex',
    flexDirection: 'column',
    alignItems: 'center',
    justifyContent: 'center',
    fontFamily: 'system-ui, sans-serif',
    textAlign: 'center',
    padding: '2rem',
  },
  nav: {
    display: 'flex',
    justifyContent: 'center',
    gap: '1.5rem',
    padding: '1rem',
    borderBottom: '1px solid #e5e7eb',
  },
  link: {
    color: '#646cff',
    textDecoration: 'none',
    fontWeight: 500,
  },
  title: {
    fontSize: '2.5rem',
    margin: '0 0 1rem',
  },
}
"#;

const ROUTER_BODY: &str = r#"
function Home() {
  return (
    <main style={styles.page}>
      <h1 style={styles.title}>Home</h1>
      <p>
        Edit <code>src/App.__EXT__</code> and save to reload.
      </p>
    </main>
  )
}

function About() {
  return (
    <main style={styles.page}>
      <h1 style={styles.title}>About</h1>
      <p>This project was bootstrapped with Vite and React Router.</p>
    </main>
  )
}

function App() {
  return (
    <BrowserRouter>
      <nav style={styles.nav}>
        <Link to="/" style={styles.link}>
          Home
        </Link>
        <Link to="/about" style={styles.link}>
          About
        </Link>
      </nav>
      <Routes>
        <Route path="/" element={<Home />} />
        <Route path="/about" element={<About />} />
      </Routes>
    </BrowserRouter>
  )
}

export default App
"#;

const LANDING_BODY: &str = r#"
function App() {
  return (
    <main style={styles.page}>
      <h1 style={styles.title}>Vite + React</h1>
      <p>
        Edit <code>src/App.__EXT__</code> and save to reload.
      </p>
    </main>
  )
}

export default App
"#;

/// Compose the entry component: Home/About routes when `router` is set,
/// a single static landing page otherwise
pub fn app_component(language: Language, router: bool) -> String {
    let mut out = String::new();

    if router {
        out.push_str("import { BrowserRouter, Link, Route, Routes } from 'react-router-dom'\n");
    }
    match language {
        Language::TypeScript => {
            out.push_str("import type { CSSProperties } from 'react'\n\n");
            out.push_str("const styles: Record<string, CSSProperties> = ");
        }
        Language::JavaScript => {
            if router {
                out.push('\n');
            }
            out.push_str("const styles = ");
        }
    }
    out.push_str(STYLES);

    let body = if router { ROUTER_BODY } else { LANDING_BODY };
    out.push_str(&body.replace("__EXT__", language.component_ext()));
    out
}

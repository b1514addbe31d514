//! Command table and dispatcher
//!
//! Maps what the visitor typed to either static text (printed through the
//! typewriter) or a game to mount.

use crate::types::GameKind;

pub const WELCOME: &str = "Type 'help' to get started";

pub const HELP: &[&str] = &[
    "Available commands:",
    "about - Who I am",
    "projects - My work",
    "experience - My current & past roles",
    "contact - Get in touch",
    "snake - Play Snake game",
    "minesweeper - Play Minesweeper",
    "rocket - Rocket launch animation",
    "tetris - Play Tetris",
    "clear - Clear the screen",
];

pub const ABOUT: &[&str] = &[
    "Im Eniyavan K",
    "⚡ A B.Tech IT graduate and IoT software developer with over 2 years of experience.",
    "💻 Specializing in Node.js, TypeScript, React.js, React Native, and Docker.",
    "🌐 I build high-performance web and mobile applications, scalable backend systems,",
    "   and innovative IoT solutions.",
    "🔧 Hands-on experience with IoT devices, sensor data management,",
    "   and real-time applications bridging hardware and software.",
    "🎯 I focus on delivering reliable, efficient, and user-centric solutions.",
    "🚀 Passionate about solving complex problems and driving meaningful impact through technology.",
    "🤝 Let’s connect and explore how I can contribute to your projects!",
];

pub const PROJECTS: &[&str] = &[
    "📌 Astromon (Health monitoring app)",
    "📌 Portfolio (this site!)",
    "📌 Node.js APIs with Prisma & InfluxDB",
];

pub const EXPERIENCE: &[&str] = &[
    "🏢 Mobitech Wireless Solution Private Limited — Jr. Backend Developer",
    "🗓 Jan 2025 - Present (9 months) · On-site · Full-time",
    "• Handling firmware-level communication by sending commands and processing response packets from IoT devices",
    "• Automating irrigation systems with time-based, cycle-based, and sensor-based modes",
    "• Ensuring reliable data flow using RabbitMQ and MQTT",
    "• Writing efficient queries and stored procedures with PostgreSQL",
    "• Using Redis for fast data access and caching",
    "• Implementing push and data notifications with Firebase Cloud Messaging (FCM)",
    "• Fixing bugs, delivering features on time, and managing tasks through Jira",
    "• Maintaining secure, scalable microservices using the MVC architecture with LoopBack,",
    "  ensuring the system stays organized for easy maintenance and growth,",
    "  while using SonarQube to keep code quality in check",
    " ",
    "🏢 Astromeda Space Pvt Ltd — Software Developer",
    "🗓 Jul 2023 - Jan 2025 (1 yr 7 mos) · On-site · Bengaluru, Karnataka, India",
    "• Developed React Native applications for real-time data visualization",
    "• Built scalable backend systems with Node.js, Prisma, and Node-RED for automated data flow",
    "• Designed scalable database schemas for PostgreSQL and InfluxDB",
    "• Worked with BLE and MQTT for real-time communication with IoT devices",
    "• Connected Dialogflow with database via Node.js service for database-driven interactions",
    "• Dockerized applications for better CI/CD",
    "• Implemented WebSockets and SSE for live data streaming",
    "• Secured authentication with RBAC and JWT",
];

pub const CONTACT: &[&str] = &[
    "📧 eniyavan.1906011@srit.org",
    "🔗 LinkedIn: https://linkedin.com/in/your-handle",
    "💻 GitHub: https://github.com/your-handle",
];

/// What a submitted command asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Wipe the visible history
    Clear,
    /// Type these lines out
    Print(&'static [&'static str]),
    /// Print the banner, then mount the game
    Launch {
        game: GameKind,
        banner: &'static str,
    },
    /// Nothing matched
    Unknown,
}

/// Look up a command. `input` is expected to be trimmed; case is ignored.
///
/// ```
/// use termfolio_core::commands::{dispatch, Dispatch};
/// use termfolio_core::types::GameKind;
///
/// assert_eq!(dispatch("CLEAR"), Dispatch::Clear);
/// assert!(matches!(dispatch("tetris"), Dispatch::Launch { game: GameKind::Tetris, .. }));
/// assert_eq!(dispatch("sudo"), Dispatch::Unknown);
/// ```
pub fn dispatch(input: &str) -> Dispatch {
    let command = input.to_lowercase();
    if let Some(game) = GameKind::from_str(&command) {
        return Dispatch::Launch {
            game,
            banner: launch_banner(game),
        };
    }
    match command.as_str() {
        "clear" => Dispatch::Clear,
        "help" => Dispatch::Print(HELP),
        "about" => Dispatch::Print(ABOUT),
        "projects" => Dispatch::Print(PROJECTS),
        "experience" => Dispatch::Print(EXPERIENCE),
        "contact" => Dispatch::Print(CONTACT),
        _ => Dispatch::Unknown,
    }
}

pub fn launch_banner(game: GameKind) -> &'static str {
    match game {
        GameKind::Snake => "Launching Snake game...",
        GameKind::Minesweeper => "Launching Minesweeper...",
        GameKind::Rocket => "Igniting Rocket...",
        GameKind::Tetris => "Launching Tetris...",
    }
}

pub fn unknown_command(input: &str) -> String {
    format!("Unknown command: {}", input)
}

/// `$ <input>` as echoed into the history
pub fn echo_line(input: &str) -> String {
    format!("{} {}", crate::types::PROMPT, input)
}

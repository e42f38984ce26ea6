use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, info, warn};

// 从 lib.rs 导入模块
use homework_hub::config::AppConfig;
use homework_hub::errors::Result;
use homework_hub::models::users::entities::UserRole;
use homework_hub::runtime::lifetime;

fn main() -> Result<()> {
    dotenv().ok();

    // 记录程序启动时间
    let start_datetime = chrono::Utc::now();

    // 初始化配置
    setup_panic!();
    AppConfig::init().expect("Failed to initialize configuration");
    let config = AppConfig::get();

    // 初始化日志
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    // 打印信息
    warn!(
        "Starting session...
        Project: {}
        Version: {}
        Authors: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS")
    );

    let controller = lifetime::startup::prepare_session(config)?;

    debug!(
        "Session prepared in {} ms",
        chrono::Utc::now()
            .signed_duration_since(start_datetime)
            .num_milliseconds()
    );

    // 输出每位教师的作业统计
    let users = controller.snapshot()?.users;
    for teacher in users.iter().filter(|u| u.role == UserRole::Teacher) {
        for overview in controller.teacher_overview(teacher.id)? {
            info!(
                "[{}] {} (due {}): read {:.0}%, submitted {:.0}%, approved {:.0}%",
                teacher.name,
                overview.assignment.subject,
                overview.assignment.due_date,
                overview.stats.read_pct,
                overview.stats.submitted_pct,
                overview.stats.graded_pct
            );
        }
    }

    // 输出每位学生的作业状态
    for dashboard in controller.student_dashboard()? {
        for group in &dashboard.subjects {
            for cell in &group.cells {
                info!(
                    "[{}] {} (due {}): {}",
                    dashboard.student.name,
                    group.subject,
                    cell.due_date,
                    cell.status.label()
                );
            }
        }
    }

    println!("{}", serde_json::to_string_pretty(&controller.snapshot()?)?);

    Ok(())
}

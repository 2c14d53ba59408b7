//! 程序入口：初始化日志、加载 Slint UI，并绑定文本面板与文件面板

use std::{cell::RefCell, path::PathBuf, rc::Rc, time::Duration};

use anyhow::Context;
use slint::ComponentHandle;
use tracing_subscriber::fmt::SubscriberBuilder;

use base64_zhuanhuan::{
    config::AppConfig,
    model::{converter::convert_file, file_info::SelectedFile},
    utils::{
        clipboard::{ClipboardError, ClipboardWriter, SystemClipboard, WithFallback},
        fs::{DialogDownloader, FileDownloader},
    },
    vm::{
        bridge::status_view,
        file_panel::FilePanel,
        status::StatusTicket,
        text_panel::TextPanel,
    },
};

slint::include_modules!();

/// 剪贴板备用方式对应的输出框
#[derive(Debug, Clone, Copy)]
enum OutputBox {
    Text,
    File,
}

/// 备用剪贴板：选中输出框内容，由 Slint 控件自身完成复制
struct OutputSelectionCopy {
    app: slint::Weak<AppWindow>,
    target: OutputBox,
}

impl ClipboardWriter for OutputSelectionCopy {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        // 输出框在复制前已与面板同步，内容即为 _text；控件复制不返回结果，无法确认是否真正写入
        let app = self
            .app
            .upgrade()
            .ok_or_else(|| ClipboardError::Clip("窗口已关闭".into()))?;
        match self.target {
            OutputBox::Text => app.invoke_copy_text_output(),
            OutputBox::File => app.invoke_copy_file_output(),
        }
        Ok(())
    }
}

/// VM桥接器：管理UI与面板状态的交互
#[derive(Clone)]
struct ViewModelBridge {
    text_panel: Rc<RefCell<TextPanel>>,
    file_panel: Rc<RefCell<FilePanel>>,
    status_display: Duration,
}

impl ViewModelBridge {
    /// 创建新的VM桥接器并绑定所有回调
    fn new(app_window: &AppWindow, config: &AppConfig) -> Self {
        let bridge = Self {
            text_panel: Rc::new(RefCell::new(TextPanel::default())),
            file_panel: Rc::new(RefCell::new(FilePanel::new(config.download_suffix.clone()))),
            status_display: config.status_display(),
        };

        bridge.setup_callbacks(app_window);
        bridge
    }

    /// 设置所有UI回调函数
    fn setup_callbacks(&self, app_window: &AppWindow) {
        // === 文本面板 ===
        {
            let bridge = self.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_encode_pressed(move || {
                if let Some(app_window) = app_window_weak.upgrade() {
                    bridge.handle_encode(&app_window, true);
                }
            });
        }
        {
            let bridge = self.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_decode_pressed(move || {
                if let Some(app_window) = app_window_weak.upgrade() {
                    bridge.handle_encode(&app_window, false);
                }
            });
        }
        {
            let bridge = self.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_text_copy_pressed(move || {
                if let Some(app_window) = app_window_weak.upgrade() {
                    bridge.handle_text_copy(&app_window);
                }
            });
        }

        // === 文件面板 ===
        {
            let bridge = self.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_choose_file(move || {
                if let Some(app_window) = app_window_weak.upgrade() {
                    bridge.handle_choose_file(&app_window);
                }
            });
        }
        {
            let bridge = self.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_convert_pressed(move || {
                if let Some(app_window) = app_window_weak.upgrade() {
                    bridge.handle_convert(&app_window);
                }
            });
        }
        {
            let bridge = self.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_clear_pressed(move || {
                if let Some(app_window) = app_window_weak.upgrade() {
                    bridge.file_panel.borrow_mut().clear();
                    bridge.sync_file_panel(&app_window);
                }
            });
        }
        {
            let bridge = self.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_file_copy_pressed(move || {
                if let Some(app_window) = app_window_weak.upgrade() {
                    bridge.handle_file_copy(&app_window);
                }
            });
        }
        {
            let bridge = self.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_download_pressed(move || {
                if let Some(app_window) = app_window_weak.upgrade() {
                    bridge.handle_download(&app_window);
                }
            });
        }
    }

    /// 初始化UI状态
    fn initialize_ui(&self, app_window: &AppWindow) {
        self.sync_text_panel(app_window);
        self.sync_file_panel(app_window);
    }

    fn sync_text_panel(&self, app_window: &AppWindow) {
        let panel = self.text_panel.borrow();
        let (status, is_error) = status_view(panel.status.current());
        app_window.set_text_output(panel.output.as_str().into());
        app_window.set_text_status(status.into());
        app_window.set_text_status_error(is_error);
    }

    fn sync_file_panel(&self, app_window: &AppWindow) {
        let panel = self.file_panel.borrow();
        let (status, is_error) = status_view(panel.status.current());
        app_window.set_file_info(panel.file_info.as_str().into());
        app_window.set_file_output(panel.output.as_str().into());
        app_window.set_file_selected(panel.selected.is_some());
        app_window.set_file_loading(panel.loading);
        app_window.set_file_status(status.into());
        app_window.set_file_status_error(is_error);
    }

    /// 状态消息到期后清除；期间若出现新消息则保留新消息
    fn expire_text_status_later(&self, app_window: &AppWindow, ticket: StatusTicket) {
        let bridge = self.clone();
        let app_window_weak = app_window.as_weak();
        slint::Timer::single_shot(self.status_display, move || {
            let cleared = bridge.text_panel.borrow_mut().status.expire(ticket);
            if let (true, Some(app_window)) = (cleared, app_window_weak.upgrade()) {
                bridge.sync_text_panel(&app_window);
            }
        });
    }

    fn expire_file_status_later(&self, app_window: &AppWindow, ticket: StatusTicket) {
        let bridge = self.clone();
        let app_window_weak = app_window.as_weak();
        slint::Timer::single_shot(self.status_display, move || {
            let cleared = bridge.file_panel.borrow_mut().status.expire(ticket);
            if let (true, Some(app_window)) = (cleared, app_window_weak.upgrade()) {
                bridge.sync_file_panel(&app_window);
            }
        });
    }

    /// 处理编码 / 解码
    fn handle_encode(&self, app_window: &AppWindow, encode: bool) {
        let ticket = {
            let mut panel = self.text_panel.borrow_mut();
            panel.input = app_window.get_text_input().to_string();
            if encode {
                panel.encode()
            } else {
                panel.decode()
            }
        };
        self.sync_text_panel(app_window);
        self.expire_text_status_later(app_window, ticket);
    }

    fn handle_text_copy(&self, app_window: &AppWindow) {
        let mut clipboard = WithFallback::new(
            SystemClipboard,
            OutputSelectionCopy { app: app_window.as_weak(), target: OutputBox::Text },
        );
        let ticket = self.text_panel.borrow_mut().copy(&mut clipboard);
        if let Some(ticket) = ticket {
            self.sync_text_panel(app_window);
            self.expire_text_status_later(app_window, ticket);
        }
    }

    /// 显示文件选择对话框
    fn show_file_dialog() -> Option<PathBuf> {
        use rfd::FileDialog;

        let file_path = FileDialog::new()
            .add_filter("图片、图标或PDF", &["jpg", "jpeg", "png", "gif", "webp", "svg", "ico", "pdf"])
            .add_filter("所有文件", &["*"])
            .set_title("选择要转换的文件")
            .pick_file();

        match file_path {
            Some(path) => {
                tracing::info!("用户选择了文件: {}", path.display());
                Some(path)
            }
            None => {
                tracing::info!("用户取消了文件选择");
                None
            }
        }
    }

    fn handle_choose_file(&self, app_window: &AppWindow) {
        // 对话框是模态的，弹出期间不持有面板借用
        let picked = Self::show_file_dialog().map(SelectedFile::open);

        let ticket = {
            let mut panel = self.file_panel.borrow_mut();
            match picked {
                None => panel.select(None),
                Some(Ok(file)) => panel.select(Some(file)),
                Some(Err(e)) => Some(panel.open_failed(&e)),
            }
        };
        self.sync_file_panel(app_window);
        if let Some(ticket) = ticket {
            self.expire_file_status_later(app_window, ticket);
        }
    }

    /// 异步转换，读取期间界面保持响应并显示加载状态
    fn handle_convert(&self, app_window: &AppWindow) {
        let Some(file) = self.file_panel.borrow_mut().begin_convert() else {
            return;
        };
        self.sync_file_panel(app_window);

        let bridge = self.clone();
        let app_window_weak = app_window.as_weak();
        let spawned = slint::spawn_local(async move {
            let result = convert_file(&file).await;
            let ticket = bridge.file_panel.borrow_mut().finish_convert(result);
            if let Some(app_window) = app_window_weak.upgrade() {
                bridge.sync_file_panel(&app_window);
                bridge.expire_file_status_later(&app_window, ticket);
            }
        });

        if let Err(e) = spawned {
            tracing::error!("无法启动转换任务: {}", e);
            self.file_panel.borrow_mut().loading = false;
            self.sync_file_panel(app_window);
        }
    }

    fn handle_file_copy(&self, app_window: &AppWindow) {
        let mut clipboard = WithFallback::new(
            SystemClipboard,
            OutputSelectionCopy { app: app_window.as_weak(), target: OutputBox::File },
        );
        let ticket = self.file_panel.borrow_mut().copy(&mut clipboard);
        if let Some(ticket) = ticket {
            self.sync_file_panel(app_window);
            self.expire_file_status_later(app_window, ticket);
        }
    }

    fn handle_download(&self, app_window: &AppWindow) {
        let Some((suggested, content)) = self.file_panel.borrow().download_request() else {
            return;
        };
        // 保存对话框同样是模态的
        let result = DialogDownloader.save_text(&suggested, &content);

        let ticket = self.file_panel.borrow_mut().download_finished(result);
        if let Some(ticket) = ticket {
            self.sync_file_panel(app_window);
            self.expire_file_status_later(app_window, ticket);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("加载配置失败")?;

    // 初始化日志输出
    let _ = SubscriberBuilder::default()
        .with_max_level(config.max_log_level()?)
        .try_init();

    let app = AppWindow::new().context("UI 初始化失败")?;

    // 创建VM桥接器并绑定UI回调
    let bridge = ViewModelBridge::new(&app, &config);
    bridge.initialize_ui(&app);

    tracing::info!("应用启动成功，UI已初始化");
    app.run().context("事件循环异常退出")?;
    Ok(())
}

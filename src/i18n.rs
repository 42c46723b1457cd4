//! UI strings for the supported languages.
//!
//! Hints that name a key use placeholders such as `{search}` or `{exit}`;
//! the keymap fills them with the keys actually bound.

use crate::models::HostStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct Texts {
    pub title: &'static str,
    pub search_mode: &'static str,
    pub search_hint: &'static str,
    pub search_prompt: &'static str,
    pub no_matches: &'static str,
    pub found_hosts: &'static str,
    pub quick_connect: &'static str,
    pub server_groups: &'static str,
    pub hosts_suffix: &'static str,
    pub group_header: &'static str,
    pub operations: &'static str,
    pub operations_short: &'static str,
    pub favorites: &'static str,
    pub no_favorites: &'static str,
    pub no_groups: &'static str,
    pub help_title: &'static str,
    pub help_lines: [&'static str; 5],
    pub theme_label: &'static str,
    pub layout_label: &'static str,
    pub connecting: &'static str,
    pub connection_closed: &'static str,
    pub press_any_key: &'static str,
    pub online: &'static str,
    pub offline: &'static str,
    pub unknown: &'static str,
    pub toast_reloaded: &'static str,
    pub toast_reload_failed: &'static str,
    pub toast_theme: &'static str,
    pub toast_layout: &'static str,
    pub toast_checking: &'static str,
    pub toast_returned: &'static str,
    pub toast_launch_failed: &'static str,
    pub toast_favorite_added: &'static str,
    pub toast_favorite_removed: &'static str,
    pub toast_save_failed: &'static str,
}

impl Texts {
    pub fn for_language(language: &str) -> &'static Texts {
        match language.trim().to_lowercase().as_str() {
            "en" => &EN,
            _ => &ZH,
        }
    }

    /// "Found N matching hosts"
    pub fn found(&self, count: usize) -> String {
        self.found_hosts.replace("{}", &count.to_string())
    }

    pub fn status(&self, status: HostStatus) -> &'static str {
        match status {
            HostStatus::Online => self.online,
            HostStatus::Offline => self.offline,
            HostStatus::Unknown => self.unknown,
        }
    }

    /// Fill the single `{}` placeholder in a template.
    pub fn fill(template: &str, value: &str) -> String {
        template.replacen("{}", value, 1)
    }
}

pub static ZH: Texts = Texts {
    title: "SSH 连接管理器",
    search_mode: "搜索模式",
    search_hint: "按ESC退出搜索，回车连接",
    search_prompt: "搜索关键词: ",
    no_matches: "未找到匹配的主机",
    found_hosts: "找到 {} 个匹配的主机",
    quick_connect: "快速连接 (按数字键1-5直接连接):",
    server_groups: "服务器分组:",
    hosts_suffix: "台主机",
    group_header: "分组: {} (按{exit}返回，{fav}收藏)",
    operations: "操作: ↑↓选择 | 回车连接 | {search}搜索 | {favorites}收藏夹 | {status}状态检查 | {reload}重载 | {theme}主题 | {layout}布局 | {exit}退出",
    operations_short: "操作: ↑↓选择 | 回车连接 | {search}搜索 | {exit}退出",
    favorites: "收藏的主机 (按{favorites}退出收藏模式):",
    no_favorites: "暂无收藏的主机，在主机列表中按{fav}键添加收藏",
    no_groups: "配置中没有主机分组",
    help_title: "操作说明",
    help_lines: [
        "↑↓ 选择项目",
        "回车 进入分组/连接主机",
        "{search} 搜索  {favorites} 收藏夹",
        "{theme} 切换主题",
        "{layout} 切换布局",
    ],
    theme_label: "主题",
    layout_label: "布局",
    connecting: "正在连接到 {}...",
    connection_closed: "与 {} 的连接已断开",
    press_any_key: "按回车键返回主菜单...",
    online: "在线",
    offline: "离线",
    unknown: "未知",
    toast_reloaded: "配置已重新加载",
    toast_reload_failed: "配置重新加载失败",
    toast_theme: "主题已切换",
    toast_layout: "布局已切换",
    toast_checking: "正在检查主机状态...",
    toast_returned: "已返回主菜单",
    toast_launch_failed: "连接失败: {}",
    toast_favorite_added: "已收藏 {}",
    toast_favorite_removed: "已取消收藏 {}",
    toast_save_failed: "配置保存失败",
};

pub static EN: Texts = Texts {
    title: "SSH Connection Manager",
    search_mode: "Search Mode",
    search_hint: "Esc to leave search, Enter to connect",
    search_prompt: "Search Keywords: ",
    no_matches: "No matching hosts found",
    found_hosts: "Found {} matching hosts",
    quick_connect: "Quick Connect (Press number key 1-5):",
    server_groups: "Server Groups:",
    hosts_suffix: "hosts",
    group_header: "Group: {} ({exit} back, {fav} favorite)",
    operations: "Operations: ↑↓Select | Enter Connect | {search}Search | {favorites} Favorites | {status} Status | {reload} Reload | {theme} Theme | {layout} Layout | {exit} Exit",
    operations_short: "↑↓Select | Enter Connect | {search}Search | {exit} Exit",
    favorites: "Favorite Hosts (Press {favorites} to exit favorites mode):",
    no_favorites: "No favorite hosts. Press {fav} in host list to add favorites",
    no_groups: "No host groups configured",
    help_title: "How to use",
    help_lines: [
        "↑↓ Select item",
        "Enter Open group / connect",
        "{search} Search  {favorites} Favorites",
        "{theme} Switch theme",
        "{layout} Switch layout",
    ],
    theme_label: "Theme",
    layout_label: "Layout",
    connecting: "Connecting to {}...",
    connection_closed: "Connection to {} closed",
    press_any_key: "Press Enter to return to main menu...",
    online: "Online",
    offline: "Offline",
    unknown: "Unknown",
    toast_reloaded: "Configuration reloaded",
    toast_reload_failed: "Configuration reload failed",
    toast_theme: "Theme switched",
    toast_layout: "Layout switched",
    toast_checking: "Checking host status...",
    toast_returned: "Back to main menu",
    toast_launch_failed: "Connection failed: {}",
    toast_favorite_added: "Added {} to favorites",
    toast_favorite_removed: "Removed {} from favorites",
    toast_save_failed: "Failed to save configuration",
};

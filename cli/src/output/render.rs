//! Text rendering of the in-memory page

use colored::Colorize;
use std::fmt::Write;
use tieba_core::content::{HOT_BOARDS, HOT_POSTS};
use tieba_core::layout::{NavGroup, SectionKind};
use tieba_core::{MemoryViewPort, Notice, PageRouter, SiteLayout, ViewPort};

/// Render the navigation bar, address line and every visible section
pub fn render_view(layout: &SiteLayout, router: &PageRouter<MemoryViewPort>) -> String {
    let vp = router.viewport();
    let mut out = String::new();

    let _ = writeln!(out, "{}", render_nav(layout, vp));

    let history = vp.history();
    let fragment = vp.fragment();
    let _ = writeln!(
        out,
        "address: {}  page: {}  history: {} entries{}{}",
        if fragment.is_empty() { "(none)" } else { fragment.as_str() },
        router.current_page(),
        history.len(),
        if history.can_go_back() { "  [back]" } else { "" },
        if history.can_go_forward() { "  [forward]" } else { "" },
    );

    let visible = vp.visible_sections();
    if visible.is_empty() {
        let _ = writeln!(
            out,
            "{}",
            format!("(no section for '{}')", router.current_page()).dimmed()
        );
        return out;
    }

    for id in visible {
        let _ = writeln!(out);
        render_section(&mut out, layout, vp, id);
    }
    out
}

fn render_nav(layout: &SiteLayout, vp: &MemoryViewPort) -> String {
    let label = |href: &str, text: &str| {
        if vp.is_nav_link_active(href) {
            format!("[{}]", text).bold().to_string()
        } else {
            text.to_string()
        }
    };

    let main: Vec<_> = layout
        .nav_links
        .iter()
        .filter(|l| l.group == NavGroup::Main)
        .map(|l| label(&l.href, &l.label))
        .collect();
    let user: Vec<_> = layout
        .nav_links
        .iter()
        .filter(|l| l.group == NavGroup::User)
        .map(|l| label(&l.href, &l.label))
        .collect();

    if user.is_empty() {
        main.join("  ")
    } else {
        format!("{}  |  {}", main.join("  "), user.join("  "))
    }
}

fn render_section(out: &mut String, layout: &SiteLayout, vp: &MemoryViewPort, id: &str) {
    let title = layout
        .section(id)
        .map(|s| s.title.as_str())
        .filter(|t| !t.is_empty())
        .unwrap_or(id);
    let _ = writeln!(out, "{} {}", format!("== {} ==", title).bold(), format!("#{}", id).dimmed());

    match vp.section_kind(id) {
        Some(SectionKind::Hero) => {
            let _ = writeln!(out, "  search: type `search <keywords>`");
        }
        Some(SectionKind::HomeContent) => render_home_content(out),
        _ => {}
    }

    if let Some(group) = layout.tab_groups.iter().find(|g| g.section == id) {
        let active = vp.active_tab(id);
        let tabs: Vec<_> = group
            .tabs
            .iter()
            .map(|t| {
                if Some(t.id.as_str()) == active {
                    format!("*{}({})", t.label, t.id).bold().to_string()
                } else {
                    format!("{}({})", t.label, t.id)
                }
            })
            .collect();
        let _ = writeln!(out, "  tabs: {}", tabs.join("  "));
        if let Some(tab) = active {
            let _ = writeln!(out, "  showing pane: {}", tab);
        }
    }

    if let Some(form) = layout.forms.iter().find(|f| f.section == id) {
        let _ = writeln!(out, "  form: {}  (type `submit`)", form.fields.join(", "));
    }
}

fn render_home_content(out: &mut String) {
    let _ = writeln!(out, "  {}", "热门贴吧".bold());
    for (index, board) in HOT_BOARDS.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>2}. [{}] {}  {} 成员",
            index + 1,
            board.avatar,
            board.name,
            board.members
        );
    }

    let _ = writeln!(out, "  {}", "热门帖子".bold());
    for (index, post) in HOT_POSTS.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>2}. {}  ({} · {})",
            index + 1,
            post.title,
            post.author,
            post.time
        );
        let _ = writeln!(
            out,
            "      views {}  replies {}  likes {}",
            post.views, post.replies, post.likes
        );
    }
}

/// Render a notice as a coloured toast line
pub fn render_notice(notice: &Notice) -> String {
    let (r, g, b) = notice.level.rgb();
    format!("» {}", notice.message).truecolor(r, g, b).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tieba_core::memory_router;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_home_view_lists_boards_and_posts() {
        plain();
        let layout = SiteLayout::tieba();
        let router = memory_router(&layout, "");
        let view = render_view(&layout, &router);

        assert!(view.contains("[首页]  热门  排行榜  |  登录  注册"));
        assert!(view.contains("address: (none)  page: home  history: 1 entries"));
        assert!(view.contains("英雄联盟"));
        assert!(view.contains("【技术】JavaScript最新特性解析"));
    }

    #[test]
    fn test_tab_page_view() {
        plain();
        let layout = SiteLayout::tieba();
        let mut router = memory_router(&layout, "");
        router.navigate_to_page("rankings", true);
        let view = render_view(&layout, &router);

        assert!(view.contains("== 排行榜 == #rankings"));
        assert!(view.contains("*日榜(daily-ranking)"));
        assert!(view.contains("[back]"));
        assert!(!view.contains("英雄联盟"));
    }

    #[test]
    fn test_unknown_page_view() {
        plain();
        let layout = SiteLayout::tieba();
        let mut router = memory_router(&layout, "");
        router.navigate_to_page("settings", true);
        assert!(render_view(&layout, &router).contains("(no section for 'settings')"));
    }

    #[test]
    fn test_render_notice() {
        plain();
        assert_eq!(render_notice(&Notice::info("hello")), "» hello");
    }
}

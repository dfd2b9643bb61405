//! Mock content for the home page
//!
//! The homepage shows a fixed grid of hot boards and a list of hot
//! posts. Selecting either only raises a notice.

use crate::notice::Notice;
use serde::Serialize;

/// A board ("tieba") shown in the hot boards grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Board {
    pub name: &'static str,
    pub members: &'static str,
    pub avatar: &'static str,
}

/// A post shown in the hot posts list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Post {
    pub title: &'static str,
    pub content: &'static str,
    pub author: &'static str,
    pub time: &'static str,
    pub views: &'static str,
    pub replies: &'static str,
    pub likes: &'static str,
    pub avatar: &'static str,
}

pub const HOT_BOARDS: [Board; 8] = [
    Board { name: "英雄联盟", members: "1280万", avatar: "LOL" },
    Board { name: "王者荣耀", members: "980万", avatar: "WZ" },
    Board { name: "原神", members: "750万", avatar: "YS" },
    Board { name: "数码", members: "620万", avatar: "SM" },
    Board { name: "美食", members: "580万", avatar: "MS" },
    Board { name: "电影", members: "520万", avatar: "DY" },
    Board { name: "音乐", members: "480万", avatar: "YY" },
    Board { name: "体育", members: "450万", avatar: "TY" },
];

pub const HOT_POSTS: [Post; 5] = [
    Post {
        title: "【讨论】大家觉得新版本哪个英雄最强？",
        content: "新版本更新后，英雄强度发生了很大变化，大家来讨论一下当前版本最强的英雄是哪个？",
        author: "游戏达人",
        time: "2小时前",
        views: "1.2万",
        replies: "356",
        likes: "890",
        avatar: "游",
    },
    Post {
        title: "【分享】今天发现了一家超好吃的火锅店！",
        content: "位置在市中心，环境很好，食材新鲜，强烈推荐给大家！",
        author: "美食家小张",
        time: "4小时前",
        views: "8.6千",
        replies: "128",
        likes: "456",
        avatar: "美",
    },
    Post {
        title: "【求助】电脑突然蓝屏怎么办？",
        content: "今天开机突然蓝屏，错误代码0x0000007B，有大神知道怎么解决吗？",
        author: "电脑小白",
        time: "6小时前",
        views: "5.3千",
        replies: "89",
        likes: "234",
        avatar: "电",
    },
    Post {
        title: "【讨论】最近有什么好看的电影推荐？",
        content: "周末想去看电影，大家有什么好推荐的吗？科幻、动作、喜剧都可以。",
        author: "电影爱好者",
        time: "8小时前",
        views: "7.1千",
        replies: "156",
        likes: "378",
        avatar: "电",
    },
    Post {
        title: "【技术】JavaScript最新特性解析",
        content: "深入解析ES2023新特性，包括新的数组方法和语法糖。",
        author: "前端开发",
        time: "12小时前",
        views: "9.8千",
        replies: "234",
        likes: "567",
        avatar: "前",
    },
];

/// Notice raised when a board in the grid is selected
pub fn open_board(index: usize) -> Option<Notice> {
    HOT_BOARDS
        .get(index)
        .map(|board| Notice::info(format!("正在跳转到 {} 贴吧", board.name)))
}

/// Notice raised when a post in the list is selected
pub fn open_post(index: usize) -> Option<Notice> {
    HOT_POSTS
        .get(index)
        .map(|_| Notice::info("正在加载帖子详情..."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_board() {
        let notice = open_board(2).unwrap();
        assert_eq!(notice.message, "正在跳转到 原神 贴吧");
        assert!(open_board(HOT_BOARDS.len()).is_none());
    }

    #[test]
    fn test_open_post() {
        assert_eq!(open_post(0).unwrap().message, "正在加载帖子详情...");
        assert!(open_post(5).is_none());
    }
}

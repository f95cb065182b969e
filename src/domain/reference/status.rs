//! Status options per dimension.

use serde::Serialize;

/// A selectable milestone status: a stable code and its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> StatusOption {
    StatusOption { value, label }
}

pub const EMOTION_STATUS_OPTIONS: [StatusOption; 9] = [
    opt("first_love", "初次认真恋爱"),
    opt("hit", "情感受到明显打击"),
    opt("breakup", "重要的分手/关系结束"),
    opt("obsessed", "反复纠结同一段关系"),
    opt("numb", "对感情失去信心/麻木"),
    opt("recovery", "状态回暖/走出阴影"),
    opt("stable", "进入长期稳定关系"),
    opt("craving", "单身且渴求感情"),
    opt("peaceful_single", "单身但状态平稳"),
];

pub const CAREER_STATUS_OPTIONS: [StatusOption; 9] = [
    opt("first_job", "开始第一份全职工作"),
    opt("change_job", "更换工作/职业跳槽"),
    opt("doubt", "对职业方向产生怀疑"),
    opt("upgrade", "职位或收入明显提升"),
    opt("bottleneck", "工作进入瓶颈期"),
    opt("transition", "完成职业转型"),
    opt("independent", "开始独立发展/创业"),
    opt("early_stress", "初期压力与不确定性"),
    opt("success", "事业取得显著成功"),
];

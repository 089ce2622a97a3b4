//! Content Library - static per-category templates.
//!
//! Everything the composer says comes from here: keyword sets, analysis
//! paragraphs, step lists, encouragement and opening pools, the two reminder
//! texts, and the connective phrasings used by the conversational renderer.
//! The table is built once and shared read-only through an `Arc`.

use std::sync::{Arc, LazyLock};

use super::emotion::Emotion;

/// Disclaimer closing every analysis paragraph
const ANALYSIS_DISCLAIMER: &str = "以下分析基于常见心理学原则，并非个体化诊断，仅供参考。";

/// Static content for one emotional category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDefinition {
    pub emotion: Emotion,
    /// Keywords scored by the classifier (lower-case)
    pub keywords: &'static [&'static str],
    /// Analysis paragraph, disclaimer included
    pub analysis: String,
    /// Action items in execution order
    pub steps: &'static [&'static str],
    /// Interchangeable encouragement messages
    pub encouragements: &'static [&'static str],
    /// Interchangeable conversational openings
    pub openings: &'static [&'static str],
}

/// Connective words wrapped around each step in the step narrative
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepConnectives {
    /// Sentence introducing the narrative
    pub lead_in: &'static str,
    pub first: &'static str,
    /// Cycled for every step between the first and the last
    pub middle: &'static [&'static str],
    pub last: &'static str,
}

/// The complete read-only content table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLibrary {
    /// One entry per category, in [`Emotion::PRIORITY`] order
    categories: [CategoryDefinition; 4],
    /// Reminder used when crisis language is present
    pub crisis_reminder: &'static str,
    /// Reminder used otherwise
    pub standard_reminder: &'static str,
    /// Templates with a `{clause}` placeholder for the analysis rephrasing
    pub analysis_connectives: &'static [&'static str],
    pub step_connectives: StepConnectives,
}

static SHARED_LIBRARY: LazyLock<Arc<ContentLibrary>> =
    LazyLock::new(|| Arc::new(ContentLibrary::builtin()));

impl ContentLibrary {
    /// The process-wide instance
    pub fn shared() -> Arc<ContentLibrary> {
        Arc::clone(&SHARED_LIBRARY)
    }

    /// Build a fresh copy of the built-in content
    pub fn builtin() -> Self {
        Self {
            categories: [
                anxiety_definition(),
                depression_definition(),
                stress_definition(),
                confusion_definition(),
            ],
            crisis_reminder: CRISIS_REMINDER,
            standard_reminder: STANDARD_REMINDER,
            analysis_connectives: ANALYSIS_CONNECTIVES,
            step_connectives: StepConnectives {
                lead_in: "试着从这些小步骤开始：",
                first: "首先",
                middle: &["然后", "接着", "另外"],
                last: "最后",
            },
        }
    }

    /// Content for one category
    pub fn category(&self, emotion: Emotion) -> &CategoryDefinition {
        &self.categories[emotion.index()]
    }

    /// All categories in priority order
    pub fn categories(&self) -> &[CategoryDefinition] {
        &self.categories
    }

    /// Reminder chosen by the crisis flag alone
    pub fn reminder(&self, crisis: bool) -> &'static str {
        if crisis {
            self.crisis_reminder
        } else {
            self.standard_reminder
        }
    }
}

const CRISIS_REMINDER: &str = "若你此刻有伤害自己或他人的念头，或难以保证自身安全，请立刻寻求紧急帮助：\
联系当地的紧急救援电话或身边可信赖的人陪伴你前往就近医院急诊/心理科。\
同时，尽量保持与他人的连接，避免单独一人。";

const STANDARD_REMINDER: &str = "以上建议不替代医疗诊断或治疗。若困扰持续两周以上或明显影响学习/工作/社交/睡眠，\
建议尽快咨询专业心理咨询师或精神科医生，获取个性化评估与支持。";

const ANALYSIS_CONNECTIVES: &[&str] = &[
    "从心理学的角度看，{clause}。",
    "我留意到，{clause}。",
    "或许可以这样理解：{clause}。",
];

fn anxiety_definition() -> CategoryDefinition {
    CategoryDefinition {
        emotion: Emotion::Anxiety,
        keywords: &["焦虑", "紧张", "担心", "恐惧", "不安", "慌", "心慌", "害怕", "担忧"],
        analysis: format!(
            "你描述中包含紧张/担忧等线索，可能存在对未来不确定性的高估与对自身能力的低估。\
             从认知行为视角，负性自动想法容易放大威胁、忽略资源，这会让身体产生警觉反应（心跳加快、肌肉紧绷）。{}",
            ANALYSIS_DISCLAIMER
        ),
        steps: &[
            "呼吸练习：进行 4-4-6 深呼吸（吸气 4 秒、停留 4 秒、呼气 6 秒）5 分钟。",
            "认知记录：写下令你担心的事件、最担心的后果、证据与反证，并给出更平衡的替代想法。",
            "行为暴露：将回避的事项拆成小步，每天完成一个最容易的步骤，累积可控感。",
            "作息与运动：固定起卧时间，每周 3 次 20 分钟中低强度运动（散步/拉伸）。",
            "正念练习：每天 5-10 分钟专注当下感受（呼吸、触感、环境声音）。",
        ],
        encouragements: &[
            "你已经在认真面对自己的感受，这本身就是勇气与力量。请给自己一些时间，循序渐进地尝试，上述建议会在实践中逐渐显效。",
            "担心说明你在乎，这份在乎本身没有错。一次只照顾好眼前的一小步，就已经很了不起了。",
            "紧张的浪潮总会退去，你比此刻感受到的更有力量。慢慢来，我们一步一步走。",
        ],
        openings: &[
            "听起来你正经历焦虑、紧张或恐惧的感受。我能理解这对你来说不容易，愿意在这里陪你一起看看能做些什么。",
            "谢谢你愿意说出这些担心。被不安包围的时候，身体和心都会很累，我们可以一起慢下来。",
            "我听到了你心里的紧张和害怕。先别急着责怪自己，这些反应其实是身体在努力保护你。",
        ],
    }
}

fn depression_definition() -> CategoryDefinition {
    CategoryDefinition {
        emotion: Emotion::Depression,
        keywords: &["抑郁", "低落", "沮丧", "无助", "孤独", "空虚", "没动力", "绝望"],
        analysis: format!(
            "你的内容呈现出情绪低落与动力不足的迹象。心理学上，这可能与长期压力、失落事件、社会支持不足或完美主义倾向有关。\
             行为激活与自我同情练习有助于逐步恢复能量与自我价值感。{}",
            ANALYSIS_DISCLAIMER
        ),
        steps: &[
            "小目标行为激活：列 3 件可在 15 分钟内完成的小事，完成后做标记。",
            "情绪—事件—想法记录：识别情绪触发点，练习更温和、现实的自我对话。",
            "亲密联系：向一位可信赖的人发消息或约一次简短见面，增强支持感。",
            "规律作息与日照：每天固定起床时间，白天接触自然光 20 分钟以上。",
            "自我同情：给当下的自己写一段鼓励话语，承认困难与努力并存。",
        ],
        encouragements: &[
            "你已经在认真面对自己的感受，这本身就是勇气与力量。请给自己一些时间，循序渐进地尝试，上述建议会在实践中逐渐显效。",
            "低落的日子里，能开口说出来已经很不容易。你并不孤单，愿意陪你一起等光慢慢照进来。",
            "哪怕今天只完成了一件很小的事，也值得被看见。你的价值从来不取决于此刻的状态。",
        ],
        openings: &[
            "听起来你正经历抑郁、低落或孤独的感受。我能理解这对你来说不容易，愿意在这里陪你一起看看能做些什么。",
            "谢谢你把这些沉甸甸的感受说出来。情绪低落的时候，连开口都需要力气，你已经做到了。",
            "我能感受到你现在的疲惫与孤单。我们不用一下子解决所有事，先从照顾好自己开始。",
        ],
    }
}

fn stress_definition() -> CategoryDefinition {
    CategoryDefinition {
        emotion: Emotion::Stress,
        keywords: &["压力", "疲惫", "累", "倦怠", "忙不过来", "崩溃", "顶不住"],
        analysis: format!(
            "你似乎承受着持续的负荷与角色要求，可能出现身心资源透支。\
             从压力—恢复的框架看，缺乏有效休息与界限设置会让疲惫持续累积，影响专注与情绪稳定。{}",
            ANALYSIS_DISCLAIMER
        ),
        steps: &[
            "番茄工作法：25 分钟专注 + 5 分钟休息，连续 3 轮后进行 20 分钟较长休息。",
            "优先级四象限：区分重要/紧急，先处理重要且紧急的 1-2 件事。",
            "界限设置：为工作与个人时间设定明确边界，并与相关人沟通预期。",
            "身体放松：睡前进行 10 分钟伸展或渐进性肌肉放松，提升睡眠质量。",
            "微恢复：白天每 90 分钟进行 2-3 分钟走动或呼吸，避免能量枯竭。",
        ],
        encouragements: &[
            "你已经在认真面对自己的感受，这本身就是勇气与力量。请给自己一些时间，循序渐进地尝试，上述建议会在实践中逐渐显效。",
            "扛了这么久，你真的辛苦了。休息不是偷懒，而是为了走得更远。",
            "你不需要一次把所有事情做完。先放下一点点重量，给自己留一口喘息的空间。",
        ],
        openings: &[
            "听起来你正经历压力大、疲惫的感受。我能理解这对你来说不容易，愿意在这里陪你一起看看能做些什么。",
            "能感觉到你最近真的撑得很辛苦。先深呼吸一下，我们一起把压在身上的东西理一理。",
        ],
    }
}

fn confusion_definition() -> CategoryDefinition {
    CategoryDefinition {
        emotion: Emotion::Confusion,
        keywords: &["困惑", "迷茫", "混乱", "不知道", "分不清", "无方向"],
        analysis: format!(
            "当前信息较为模糊或包含多种情绪线索。可先澄清主要困扰与目标，\
             再结合当下最想解决的一件事开始尝试。{}",
            ANALYSIS_DISCLAIMER
        ),
        steps: &[
            "澄清困扰：用一两句话写下此刻最想改变的一件事。",
            "设定下一步：把这件事拆成一个最小可执行动作，并在 24 小时内完成。",
            "信息收集：列出 2-3 个你已有的资源与可能的支持者。",
            "放松练习：用 5 分钟做腹式呼吸或正念观察，让身心回到当下。",
        ],
        encouragements: &[
            "你已经在认真面对自己的感受，这本身就是勇气与力量。请给自己一些时间，循序渐进地尝试，上述建议会在实践中逐渐显效。",
            "感到迷茫并不代表走错了路，它往往意味着你正在认真寻找方向。",
        ],
        openings: &[
            "听起来你现在的情绪有些混合，或者有点困惑。我能理解这对你来说不容易，愿意在这里陪你一起看看能做些什么。",
            "谢谢你愿意来聊聊。有时候心里乱糟糟的，说不清是什么感觉，这也完全没关系。",
        ],
    }
}

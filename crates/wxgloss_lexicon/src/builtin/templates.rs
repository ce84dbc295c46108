//! Built-in catalog templates: `(key, en, zh-CN)`.

pub(crate) const TEMPLATES: &[(&str, &str, &str)] = &[
    // Field labels
    ("fields.station", "Station", "站点"),
    ("fields.issue_time", "Issue time", "发布时间"),
    ("fields.validity", "Validity", "有效期"),
    ("fields.wind", "Wind", "风"),
    ("fields.wind_variation", "Wind variation", "风向变化"),
    ("fields.visibility", "Visibility", "能见度"),
    ("fields.rvr", "RVR", "跑道视程"),
    ("fields.weather", "Weather", "天气现象"),
    ("fields.clouds", "Clouds", "云"),
    ("fields.temperature", "Temperature", "温度"),
    ("fields.pressure", "Pressure", "气压"),
    ("fields.pressure_altimeter", "Altimeter", "高度表拨正值"),
    ("fields.trend", "Trend", "趋势"),
    ("fields.rmk", "Remarks", "备注"),
    ("fields.rmk_item", "Remark item", "备注项"),
    ("fields.raw_tokens", "Unparsed tokens", "未解析内容"),
    ("fields.notam_q_prefix", "Q) ", "Q) "),
    ("fields.notam_a", "A) Location", "A) 位置"),
    ("fields.notam_b", "B) Start", "B) 生效时间"),
    ("fields.notam_c", "C) End", "C) 失效时间"),
    ("fields.notam_d", "D) Schedule", "D) 时间段"),
    ("fields.notam_e", "E) Text", "E) 正文"),
    ("fields.notam_f", "F) Lower limit", "F) 下限"),
    ("fields.notam_g", "G) Upper limit", "G) 上限"),
    // Token labels
    ("analysis.labels.report_type", "Report type", "报文类型"),
    ("analysis.labels.station", "Station", "站点"),
    ("analysis.labels.issue_time", "Issue time", "发布时间"),
    ("analysis.labels.validity", "Validity", "有效期"),
    ("analysis.labels.wind", "Wind", "风"),
    ("analysis.labels.wind_variation", "Wind variation", "风向变化"),
    ("analysis.labels.visibility", "Visibility", "能见度"),
    ("analysis.labels.rvr", "RVR", "跑道视程"),
    ("analysis.labels.weather", "Weather", "天气现象"),
    ("analysis.labels.clouds", "Clouds", "云"),
    ("analysis.labels.temperature", "Temperature", "温度"),
    ("analysis.labels.pressure", "Pressure", "气压"),
    ("analysis.labels.trend", "Trend", "趋势"),
    ("analysis.labels.trend_period", "Trend period", "趋势时段"),
    ("analysis.labels.trend_wind", "Trend wind", "趋势风"),
    ("analysis.labels.trend_visibility", "Trend visibility", "趋势能见度"),
    ("analysis.labels.trend_weather", "Trend weather", "趋势天气"),
    ("analysis.labels.trend_clouds", "Trend clouds", "趋势云"),
    ("analysis.labels.remark", "Remark", "备注"),
    ("analysis.labels.notam", "NOTAM item", "NOTAM 项"),
    ("analysis.labels.unknown", "Unrecognised", "未识别"),
    ("analysis.tendency.up", "increasing", "上升"),
    ("analysis.tendency.down", "decreasing", "下降"),
    ("analysis.tendency.no_change", "no change", "无变化"),
    // Code with its meaning
    ("gloss", "{code} ({meaning})", "{code}（{meaning}）"),
    ("gloss.separator", ", ", "、"),
    // METAR
    ("explain.metar.station", "Report from {station}.", "报文来自 {station}。"),
    ("explain.metar.issue_time", "Observed at {time}.", "观测时间 {time}。"),
    ("explain.metar.wind", "Wind {wind}.", "风 {wind}。"),
    ("explain.metar.wind_vrb", "Wind variable in direction at {speed}.", "风向不定，风速 {speed}。"),
    ("explain.metar.wind_gust", "Wind {wind}, gusting to {gust}.", "风 {wind}，阵风 {gust}。"),
    (
        "explain.metar.wind_variation",
        "Wind direction varying between {from}° and {to}°.",
        "风向在 {from}° 至 {to}° 之间变化。",
    ),
    ("explain.metar.visibility", "Visibility {visibility}.", "能见度 {visibility}。"),
    (
        "explain.metar.visibility_raw",
        "Visibility reported as {visibility}.",
        "能见度报告为 {visibility}。",
    ),
    ("explain.metar.rvr", "Runway {runway} visual range {rvr}.", "跑道 {runway} 视程 {rvr}。"),
    ("explain.metar.weather", "Present weather: {weather}.", "当前天气：{weather}。"),
    ("explain.metar.clouds", "Clouds: {clouds}.", "云况：{clouds}。"),
    ("explain.metar.temperature", "Temperature / dewpoint {temp}.", "温度/露点 {temp}。"),
    ("explain.metar.pressure", "QNH {pressure}.", "修正海压 {pressure}。"),
    ("explain.metar.altimeter", "Altimeter setting {altimeter}.", "高度表拨正值 {altimeter}。"),
    ("explain.metar.trend", "Trend: {trend}.", "趋势：{trend}。"),
    ("explain.metar.remark", "Remarks: {remark}", "备注：{remark}"),
    ("explain.metar.raw", "Not decoded: {tokens}.", "未解码内容：{tokens}。"),
    // TAF
    ("explain.taf.station", "Forecast for {station}.", "{station} 的预报。"),
    ("explain.taf.issue_time", "Issued at {time}.", "发布于 {time}。"),
    ("explain.taf.validity", "Valid {validity}.", "有效期 {validity}。"),
    ("explain.taf.wind", "Forecast wind {wind}.", "预报风 {wind}。"),
    (
        "explain.taf.wind_vrb",
        "Forecast wind variable in direction at {speed}.",
        "预报风向不定，风速 {speed}。",
    ),
    ("explain.taf.wind_gust", "Forecast wind {wind}, gusting to {gust}.", "预报风 {wind}，阵风 {gust}。"),
    ("explain.taf.visibility", "Forecast visibility {visibility}.", "预报能见度 {visibility}。"),
    ("explain.taf.weather", "Forecast weather: {weather}.", "预报天气：{weather}。"),
    ("explain.taf.clouds", "Forecast clouds: {clouds}.", "预报云况：{clouds}。"),
    ("explain.taf.trends", "Change groups: {trends}.", "变化组：{trends}。"),
    ("explain.taf.trend_period", "{kind} during {period}.", "{kind}，时段 {period}。"),
    ("explain.taf.trend_wind", "{kind}: wind {wind}.", "{kind}：风 {wind}。"),
    (
        "explain.taf.trend_visibility",
        "{kind}: visibility {visibility}.",
        "{kind}：能见度 {visibility}。",
    ),
    ("explain.taf.trend_weather", "{kind}: weather {weather}.", "{kind}：天气 {weather}。"),
    ("explain.taf.trend_clouds", "{kind}: clouds {clouds}.", "{kind}：云 {clouds}。"),
    ("taf.temp.max", "maximum", "最高"),
    ("taf.temp.min", "minimum", "最低"),
    (
        "taf.temp.explain",
        "Forecast {kind} temperature {temp} at {time}.",
        "预报{kind}温度 {temp}，时间 {time}。",
    ),
    // Trend keywords
    ("trend.kind.NOSIG", "no significant change expected", "预计无显著变化"),
    ("trend.kind.BECMG", "becoming", "逐渐转变为"),
    ("trend.kind.TEMPO", "temporarily", "短时"),
    // NOTAM items
    ("explain.notam.location", "Location: {location}.", "位置：{location}。"),
    ("explain.notam.start", "Effective from {start}.", "生效时间 {start}。"),
    ("explain.notam.end", "Valid until {end}.", "失效时间 {end}。"),
    ("explain.notam.body", "Text: {body}", "正文：{body}"),
    ("explain.notam.lower", "Lower limit {value}.", "下限 {value}。"),
    ("explain.notam.upper", "Upper limit {value}.", "上限 {value}。"),
    ("notam.schedule.daily", "Daily {start} to {end}", "每日 {start} 至 {end}"),
    ("notam.schedule.range", "{start} to {end}", "{start} 至 {end}"),
    ("notam.time.permanent", "permanent", "永久"),
    ("notam.time.estimated", "{time} (estimated)", "{time}（预计）"),
    // Q-line
    ("notam.q.tag_q", "Q) ", "Q) "),
    ("notam.q.part_full", "Q-line", "Q 行"),
    ("notam.q.part_fir", "FIR", "飞行情报区"),
    ("notam.q.part_q_code", "Q-code", "Q 代码"),
    ("notam.q.part_traffic", "Traffic", "飞行类型"),
    ("notam.q.part_purpose", "Purpose", "目的"),
    ("notam.q.part_scope", "Scope", "范围"),
    ("notam.q.part_lower", "Lower limit", "下限"),
    ("notam.q.part_upper", "Upper limit", "上限"),
    ("notam.q.part_center", "Centre / radius", "中心/半径"),
    ("notam.q.full", "Q-line summary: {summary}", "Q 行摘要：{summary}"),
    (
        "notam.q.opaque",
        "Not in the 8-part Q-line format; shown as received.",
        "不是 8 段 Q 行格式，按原文显示。",
    ),
    (
        "notam.q.q_code",
        "{code}: subject {subject_code} {subject}; condition {condition_code} {condition}",
        "{code}：主题 {subject_code} {subject}；状态 {condition_code} {condition}",
    ),
    ("notam.q.q_code_simple", "{code}: {meaning}", "{code}：{meaning}"),
    ("notam.q.q_code_unknown", "unrecognised Q-code {code}", "无法识别的 Q 代码 {code}"),
    ("notam.q.subject_unknown", "unspecified subject (code {code})", "未指定主题（代码 {code}）"),
    ("notam.q.subject_reserved", "subject not specified ({code} reserved)", "主题未指定（{code} 为保留代码）"),
    ("notam.q.condition_unknown", "unspecified condition (code {code})", "未指定状态（代码 {code}）"),
    (
        "notam.q.condition_reserved",
        "condition not specified ({code} reserved)",
        "状态未指定（{code} 为保留代码）",
    ),
    ("notam.q.traffic", "Traffic: {meaning}", "飞行类型：{meaning}"),
    ("notam.q.traffic_I", "IFR", "IFR"),
    ("notam.q.traffic_I_desc", "instrument flight rules", "仪表飞行规则"),
    ("notam.q.traffic_V", "VFR", "VFR"),
    ("notam.q.traffic_V_desc", "visual flight rules", "目视飞行规则"),
    ("notam.q.traffic_K", "checklist", "检查单"),
    ("notam.q.traffic_K_desc", "NOTAM checklist", "NOTAM 检查单"),
    ("notam.q.purpose", "Purpose: {meaning}", "目的：{meaning}"),
    ("notam.q.purpose_N", "immediate attention of operators", "需运营人立即关注"),
    ("notam.q.purpose_B", "pre-flight information bulletin", "飞行前资料公告"),
    ("notam.q.purpose_O", "flight operations", "飞行运行"),
    ("notam.q.purpose_M", "miscellaneous", "其他"),
    ("notam.q.purpose_K", "checklist", "检查单"),
    ("notam.q.scope", "Scope: {meaning}", "范围：{meaning}"),
    ("notam.q.scope_A", "aerodrome", "机场"),
    ("notam.q.scope_E", "en-route", "航路"),
    ("notam.q.scope_W", "navigation warning", "航行警告"),
    ("notam.q.scope_K", "checklist", "检查单"),
    ("notam.q.center", "Centre / radius: {value}", "中心/半径：{value}"),
    ("notam.q.center_parsed", "Centre {lat} {lon}, radius {radius}", "中心 {lat} {lon}，半径 {radius}"),
    // Remark groups
    ("remark.ao1", "Automated station without precipitation discriminator", "自动站（无降水类型识别）"),
    ("remark.ao2", "Automated station with precipitation discriminator", "自动站（有降水类型识别）"),
    ("remark.slp", "Sea-level pressure {pressure}", "海平面气压 {pressure}"),
    ("remark.temp_dewpoint", "Temperature {temp}, dewpoint {dew}", "温度 {temp}，露点 {dew}"),
    ("remark.temp_only", "Temperature {temp}", "温度 {temp}"),
    ("remark.dew_only", "Dewpoint {dew}", "露点 {dew}"),
    ("remark.precip_1h", "Precipitation in the last hour {amount} in", "过去一小时降水量 {amount} 英寸"),
];

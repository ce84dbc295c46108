//! Built-in lexicon tables: `(code, en, zh-CN)`.

pub(crate) const WEATHER_INTENSITY: &[(&str, &str, &str)] = &[
    ("-", "light", "小"),
    ("+", "heavy", "强"),
];

pub(crate) const WEATHER_DESCRIPTOR: &[(&str, &str, &str)] = &[
    ("MI", "shallow", "浅"),
    ("PR", "partial", "部分"),
    ("BC", "patches", "片状"),
    ("DR", "low drifting", "低吹"),
    ("BL", "blowing", "高吹"),
    ("SH", "showers", "阵性"),
    ("TS", "thunderstorm", "雷暴"),
    ("FZ", "freezing", "冻"),
    ("VC", "in the vicinity", "附近"),
];

pub(crate) const WEATHER_PHENOMENON: &[(&str, &str, &str)] = &[
    ("DZ", "drizzle", "毛毛雨"),
    ("RA", "rain", "雨"),
    ("SN", "snow", "雪"),
    ("SG", "snow grains", "米雪"),
    ("IC", "ice crystals", "冰晶"),
    ("PL", "ice pellets", "冰粒"),
    ("GR", "hail", "冰雹"),
    ("GS", "small hail", "小冰雹"),
    ("UP", "unknown precipitation", "未知降水"),
    ("BR", "mist", "轻雾"),
    ("FG", "fog", "雾"),
    ("FU", "smoke", "烟"),
    ("VA", "volcanic ash", "火山灰"),
    ("DU", "widespread dust", "浮尘"),
    ("SA", "sand", "沙"),
    ("HZ", "haze", "霾"),
    ("PY", "spray", "飞沫"),
    ("PO", "dust whirls", "尘卷风"),
    ("SQ", "squalls", "飑"),
    ("FC", "funnel cloud", "漏斗云"),
    ("SS", "sandstorm", "沙暴"),
    ("DS", "duststorm", "尘暴"),
];

pub(crate) const CLOUD_AMOUNT: &[(&str, &str, &str)] = &[
    ("FEW", "few", "少云"),
    ("SCT", "scattered", "疏云"),
    ("BKN", "broken", "多云"),
    ("OVC", "overcast", "阴天"),
    ("VV", "vertical visibility", "垂直能见度"),
    ("NSC", "no significant cloud", "无重要云"),
    ("NCD", "no cloud detected", "未探测到云"),
    ("SKC", "sky clear", "碧空"),
    ("CLR", "clear below 12000ft", "12000 英尺以下无云"),
];

pub(crate) const FIR: &[(&str, &str, &str)] = &[
    ("EGTT", "London", "伦敦"),
    ("EGPX", "Scottish", "苏格兰"),
    ("EISN", "Shannon", "香农"),
    ("EHAA", "Amsterdam", "阿姆斯特丹"),
    ("EBBU", "Brussels", "布鲁塞尔"),
    ("LFFF", "Paris", "巴黎"),
    ("LFMM", "Marseille", "马赛"),
    ("EDGG", "Langen", "兰根"),
    ("EDMM", "München", "慕尼黑"),
    ("EDWW", "Bremen", "不来梅"),
    ("LSAS", "Switzerland", "瑞士"),
    ("LOVV", "Wien", "维也纳"),
    ("LIMM", "Milano", "米兰"),
    ("LIRR", "Roma", "罗马"),
    ("LECM", "Madrid", "马德里"),
    ("LPPC", "Lisboa", "里斯本"),
    ("EKDK", "København", "哥本哈根"),
    ("ESAA", "Sweden", "瑞典"),
    ("ENOR", "Polaris", "挪威"),
    ("EFIN", "Finland", "芬兰"),
    ("EPWW", "Warszawa", "华沙"),
    ("ZBPE", "Beijing", "北京"),
    ("ZSHA", "Shanghai", "上海"),
    ("ZGZU", "Guangzhou", "广州"),
    ("ZJSA", "Sanya", "三亚"),
    ("ZHWH", "Wuhan", "武汉"),
    ("ZLHW", "Lanzhou", "兰州"),
    ("ZPKM", "Kunming", "昆明"),
    ("ZUUU", "Chengdu", "成都"),
    ("ZWUQ", "Urumqi", "乌鲁木齐"),
    ("ZYSH", "Shenyang", "沈阳"),
    ("VHHK", "Hong Kong", "香港"),
    ("RCAA", "Taipei", "台北"),
    ("RJJJ", "Fukuoka", "福冈"),
    ("RKRR", "Incheon", "仁川"),
    ("WSJC", "Singapore", "新加坡"),
    ("VTBB", "Bangkok", "曼谷"),
    ("OMAE", "Emirates", "阿联酋"),
    ("YMMM", "Melbourne", "墨尔本"),
    ("YBBB", "Brisbane", "布里斯班"),
    ("KZNY", "New York", "纽约"),
    ("KZLA", "Los Angeles", "洛杉矶"),
    ("KZOA", "Oakland", "奥克兰"),
    ("CZYZ", "Toronto", "多伦多"),
];

pub(crate) const NOTAM_SUBJECT: &[(&str, &str, &str)] = &[
    ("AA", "minimum altitude", "最低高度"),
    ("AC", "control zone", "管制地带"),
    ("AD", "air defence identification zone", "防空识别区"),
    ("AE", "control area", "管制区"),
    ("AF", "flight information region", "飞行情报区"),
    ("AH", "upper control area", "高空管制区"),
    ("AL", "minimum usable flight level", "最低可用飞行高度层"),
    ("AN", "area navigation route", "区域导航航路"),
    ("AO", "oceanic control area", "洋区管制区"),
    ("AP", "reporting point", "报告点"),
    ("AR", "ATS route", "空中交通服务航路"),
    ("AT", "terminal control area", "终端管制区"),
    ("AU", "upper flight information region", "高空飞行情报区"),
    ("AX", "significant point", "重要点"),
    ("AZ", "aerodrome traffic zone", "机场交通地带"),
    ("CA", "air/ground facility", "地空通信设施"),
    ("CE", "en-route surveillance radar", "航路监视雷达"),
    ("CP", "precision approach radar", "精密进近雷达"),
    ("CS", "secondary surveillance radar", "二次监视雷达"),
    ("CT", "terminal area surveillance radar", "终端区监视雷达"),
    ("FA", "aerodrome", "机场"),
    ("FF", "fire fighting and rescue", "消防救援"),
    ("FH", "helicopter alighting area", "直升机着陆区"),
    ("FM", "meteorological service", "气象服务"),
    ("FU", "fuel availability", "燃油供应"),
    ("FW", "wind direction indicator", "风向标"),
    ("GA", "GNSS airfield-specific operations", "机场 GNSS 运行"),
    ("GW", "GNSS area-wide operations", "区域 GNSS 运行"),
    ("IC", "instrument landing system", "仪表着陆系统"),
    ("ID", "DME associated with ILS", "ILS 配套测距仪"),
    ("IG", "glide path (ILS)", "下滑台（ILS）"),
    ("II", "inner marker (ILS)", "内指点标（ILS）"),
    ("IL", "localizer (ILS)", "航向台（ILS）"),
    ("IM", "middle marker (ILS)", "中指点标（ILS）"),
    ("IO", "outer marker (ILS)", "外指点标（ILS）"),
    ("IS", "ILS category I", "I 类仪表着陆系统"),
    ("IT", "ILS category II", "II 类仪表着陆系统"),
    ("IU", "ILS category III", "III 类仪表着陆系统"),
    ("LA", "approach lighting system", "进近灯光系统"),
    ("LB", "aerodrome beacon", "机场灯标"),
    ("LC", "runway centre line lights", "跑道中线灯"),
    ("LE", "runway edge lights", "跑道边灯"),
    ("LH", "high intensity runway lights", "高强度跑道灯"),
    ("LI", "runway end identifier lights", "跑道端识别灯"),
    ("LP", "precision approach path indicator", "精密进近航道指示器"),
    ("LR", "all landing area lighting facilities", "全部着陆区灯光设施"),
    ("LT", "threshold lights", "跑道入口灯"),
    ("LX", "taxiway centre line lights", "滑行道中线灯"),
    ("LY", "taxiway edge lights", "滑行道边灯"),
    ("LZ", "runway touchdown zone lights", "跑道接地带灯"),
    ("MA", "movement area", "活动区"),
    ("MB", "bearing strength", "道面强度"),
    ("MD", "declared distances", "公布距离"),
    ("MK", "parking area", "停机区"),
    ("MM", "daylight markings", "昼间标志"),
    ("MN", "apron", "停机坪"),
    ("MP", "aircraft stands", "机位"),
    ("MR", "runway", "跑道"),
    ("MS", "stopway", "停止道"),
    ("MT", "threshold", "跑道入口"),
    ("MW", "strip", "升降带"),
    ("MX", "taxiway", "滑行道"),
    ("MY", "rapid exit taxiway", "快速出口滑行道"),
    ("NA", "all radio navigation facilities", "全部无线电导航设施"),
    ("NB", "non-directional radio beacon", "无方向性信标"),
    ("ND", "distance measuring equipment", "测距仪"),
    ("NL", "locator", "示位信标"),
    ("NM", "VOR/DME", "全向信标/测距仪"),
    ("NN", "TACAN", "塔康"),
    ("NT", "VORTAC", "伏塔克"),
    ("NV", "VOR", "全向信标"),
    ("OA", "aeronautical information service", "航空情报服务"),
    ("OB", "obstacle", "障碍物"),
    ("OL", "obstacle lights", "障碍灯"),
    ("PA", "standard instrument arrival", "标准仪表进场"),
    ("PD", "standard instrument departure", "标准仪表离场"),
    ("PF", "flow control procedure", "流量控制程序"),
    ("PH", "holding procedure", "等待程序"),
    ("PI", "instrument approach procedure", "仪表进近程序"),
    ("PM", "aerodrome operating minima", "机场运行最低标准"),
    ("PN", "noise operating restrictions", "噪音运行限制"),
    ("PU", "missed approach procedure", "复飞程序"),
    ("RA", "airspace reservation", "空域保留"),
    ("RD", "danger area", "危险区"),
    ("RM", "military operating area", "军事活动区"),
    ("RP", "prohibited area", "禁区"),
    ("RR", "restricted area", "限制区"),
    ("RT", "temporary restricted area", "临时限制区"),
    ("SA", "automatic terminal information service", "自动终端情报服务"),
    ("SC", "area control centre", "区域管制中心"),
    ("SE", "flight information service", "飞行情报服务"),
    ("SP", "approach control service", "进近管制服务"),
    ("ST", "aerodrome control tower", "机场管制塔台"),
    ("SV", "VOLMET broadcast", "对空气象广播"),
    ("WA", "air display", "飞行表演"),
    ("WB", "aerobatics", "特技飞行"),
    ("WC", "captive balloon or kite", "系留气球或风筝"),
    ("WD", "demolition of explosives", "爆炸物销毁"),
    ("WE", "exercises", "演习"),
    ("WF", "air refuelling", "空中加油"),
    ("WG", "glider flying", "滑翔机飞行"),
    ("WJ", "banner or target towing", "拖曳横幅或靶标"),
    ("WL", "ascent of free balloon", "自由气球升空"),
    ("WM", "missile, gun or rocket firing", "导弹、火炮或火箭射击"),
    ("WP", "parachute jumping exercise", "跳伞活动"),
    ("WU", "unmanned aircraft", "无人驾驶航空器"),
    ("WV", "formation flight", "编队飞行"),
    ("WW", "significant volcanic activity", "重大火山活动"),
    ("WZ", "model flying", "航模飞行"),
];

pub(crate) const NOTAM_CONDITION: &[(&str, &str, &str)] = &[
    ("AC", "withdrawn for maintenance", "因维护撤除"),
    ("AD", "available for daylight operation", "昼间可用"),
    ("AF", "flight checked and found reliable", "经飞行校验可靠"),
    ("AG", "operating but ground checked only", "运行中，仅经地面校验"),
    ("AH", "hours of service are now", "服务时间改为"),
    ("AK", "resumed normal operation", "恢复正常运行"),
    ("AL", "operative subject to previously published limitations", "按已公布限制运行"),
    ("AM", "military operations only", "仅限军事运行"),
    ("AN", "available for night operation", "夜间可用"),
    ("AO", "operational", "运行"),
    ("AP", "available, prior permission required", "可用，需事先许可"),
    ("AR", "available on request", "按申请提供"),
    ("AS", "unserviceable", "不可用"),
    ("AU", "not available", "不提供"),
    ("AW", "completely withdrawn", "完全撤除"),
    ("AX", "previously promulgated shutdown cancelled", "取消此前公布的关闭"),
    ("CA", "activated", "启用"),
    ("CC", "completed", "完成"),
    ("CD", "deactivated", "停用"),
    ("CE", "erected", "竖立"),
    ("CF", "operating frequency changed to", "工作频率改为"),
    ("CG", "downgraded to", "降级为"),
    ("CH", "changed", "变更"),
    ("CI", "identification or radio call sign changed to", "识别码或呼号改为"),
    ("CL", "realigned", "调整方向"),
    ("CM", "displaced", "内移"),
    ("CN", "cancelled", "取消"),
    ("CO", "operating", "工作"),
    ("CP", "operating on reduced power", "降功率工作"),
    ("CR", "temporarily replaced by", "临时替换为"),
    ("CS", "installed", "安装"),
    ("CT", "on test, do not use", "测试中，请勿使用"),
    ("HA", "braking action is", "刹车效应为"),
    ("HB", "friction coefficient is", "摩擦系数为"),
    ("HC", "covered by compacted snow", "覆盖压实积雪"),
    ("HD", "covered by dry snow", "覆盖干雪"),
    ("HE", "covered by water", "积水覆盖"),
    ("HF", "totally free of snow and ice", "完全无冰雪"),
    ("HG", "grass cutting in progress", "正在割草"),
    ("HH", "hazard due to", "存在危险，原因"),
    ("HI", "covered by ice", "结冰覆盖"),
    ("HK", "bird migration in progress", "鸟类迁徙中"),
    ("HL", "snow clearance completed", "除雪完成"),
    ("HM", "marked by", "标示为"),
    ("HN", "covered by wet snow or slush", "覆盖湿雪或雪浆"),
    ("HP", "snow clearance in progress", "正在除雪"),
    ("HQ", "operation cancelled", "运行取消"),
    ("HR", "standing water", "积水"),
    ("HS", "sanding in progress", "正在撒沙"),
    ("HV", "work completed", "施工完成"),
    ("HW", "work in progress", "正在施工"),
    ("HX", "concentration of birds", "鸟类聚集"),
    ("LB", "reserved for aircraft based therein", "保留给驻场航空器"),
    ("LC", "closed", "关闭"),
    ("LD", "unsafe", "不安全"),
    ("LF", "interference from", "受到干扰，来源"),
    ("LG", "operating without identification", "无识别信号工作"),
    ("LH", "unserviceable for aircraft heavier than", "对重于以下重量的航空器不可用"),
    ("LI", "closed to IFR operations", "对仪表飞行关闭"),
    ("LK", "operating as a fixed light", "以定光方式工作"),
    ("LL", "usable for length and width of", "可用长度和宽度为"),
    ("LN", "closed to all night operations", "夜间全部关闭"),
    ("LP", "prohibited to", "禁止"),
    ("LR", "aircraft restricted to runways and taxiways", "航空器限于跑道和滑行道"),
    ("LS", "subject to interruption", "可能中断"),
    ("LT", "limited to", "限于"),
    ("LV", "closed to VFR operations", "对目视飞行关闭"),
    ("LW", "will take place", "将进行"),
    ("LX", "operating but caution advised due to", "运行中，注意"),
];

pub(crate) const NOTAM_BODY: &[(&str, &str, &str)] = &[
    ("RWY", "runway", "跑道"),
    ("TWY", "taxiway", "滑行道"),
    ("APRON", "apron", "停机坪"),
    ("AD", "aerodrome", "机场"),
    ("CLSD", "closed", "关闭"),
    ("ILS", "ILS", "仪表着陆系统"),
    ("U/S", "unserviceable", "不可用"),
    ("WIP", "work in progress", "施工中"),
    ("WKG", "working", "工作中"),
    ("OBST", "obstacle", "障碍物"),
    ("VOR", "VOR", "全向信标"),
    ("DME", "DME", "测距仪"),
    ("NDB", "NDB", "无方向信标"),
    ("LOC", "localizer", "航向信标"),
    ("GS", "glide slope", "下滑道"),
    ("PAPI", "PAPI", "精密进近航道指示器"),
    ("ALS", "approach lighting system", "进近灯光系统"),
    ("RSTR", "restricted", "限制"),
    ("AVBL", "available", "可用"),
    ("UNAVBL", "unavailable", "不可用"),
    ("UFN", "until further notice", "另行通知前"),
    ("SFC", "surface", "地面"),
    ("FL", "flight level", "飞行高度层"),
    ("MSL", "mean sea level", "平均海平面"),
    ("AGL", "above ground level", "离地高度"),
    ("BTN", "between", "之间"),
    ("EXC", "except", "除外"),
    ("DLY", "daily", "每日"),
    ("TIL", "until", "直至"),
    ("EXTD", "extended", "延长"),
    ("EST", "estimated", "预计"),
    ("ACT", "active", "活动"),
    ("ACFT", "aircraft", "航空器"),
    ("HEL", "helicopter", "直升机"),
    ("LGT", "lighting", "灯光"),
    ("OPS", "operations", "运行"),
    ("MAINT", "maintenance", "维护"),
    ("PPR", "prior permission required", "需事先许可"),
    ("CRANE", "crane", "吊车"),
    ("THR", "threshold", "跑道入口"),
    ("NR.", "number ", "编号"),
    ("ACT ARE", "activity area", "活动区域"),
    ("PARKING STAND", "parking stand", "停机位"),
    ("DUE TO", "due to", "由于"),
];

pub const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS programs (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    company TEXT NOT NULL,
    description TEXT NOT NULL,
    logo TEXT NOT NULL,
    bounty_range TEXT NOT NULL,
    min_bounty REAL NOT NULL,
    max_bounty REAL NOT NULL,
    vulnerability_types TEXT NOT NULL DEFAULT '[]',
    scope TEXT NOT NULL DEFAULT '[]',
    reports_count INTEGER NOT NULL DEFAULT 0,
    resolved_count INTEGER NOT NULL DEFAULT 0,
    researchers_count INTEGER NOT NULL DEFAULT 0,
    total_paid TEXT NOT NULL DEFAULT '$0',
    critical_vulns INTEGER NOT NULL DEFAULT 0,
    average_time TEXT NOT NULL DEFAULT 'N/A',
    rating REAL NOT NULL DEFAULT 0.0,
    status TEXT NOT NULL DEFAULT 'active',
    is_new INTEGER NOT NULL DEFAULT 1,
    launched_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS reports (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    program_name TEXT NOT NULL,
    severity TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'pending',
    reporter_name TEXT NOT NULL,
    reporter_uid TEXT NOT NULL,
    submitted_at TEXT NOT NULL,
    last_activity TEXT NOT NULL,
    cvss_score REAL,
    weakness TEXT,
    vulnerable_url TEXT NOT NULL,
    description TEXT NOT NULL,
    steps_to_reproduce TEXT NOT NULL,
    proof_of_concept TEXT,
    impact_assessment TEXT,
    suggested_fix TEXT,
    bounty TEXT NOT NULL DEFAULT 'N/A'
);

CREATE TABLE IF NOT EXISTS profiles (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    role TEXT NOT NULL DEFAULT 'researcher',
    company_name TEXT,
    reputation INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS leaderboard (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    username TEXT NOT NULL,
    country TEXT NOT NULL DEFAULT '',
    reputation INTEGER NOT NULL DEFAULT 0,
    reports_count INTEGER NOT NULL DEFAULT 0,
    bounties_total REAL NOT NULL DEFAULT 0.0
);

CREATE TABLE IF NOT EXISTS hacktivity (
    id TEXT PRIMARY KEY,
    type TEXT NOT NULL,
    reporter_name TEXT NOT NULL,
    reporter_uid TEXT NOT NULL,
    program_name TEXT NOT NULL,
    title TEXT NOT NULL,
    severity TEXT NOT NULL,
    bounty TEXT NOT NULL DEFAULT 'N/A',
    timestamp TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_programs_company ON programs(company);
CREATE INDEX IF NOT EXISTS idx_reports_reporter ON reports(reporter_uid);
CREATE INDEX IF NOT EXISTS idx_reports_program ON reports(program_name);
CREATE INDEX IF NOT EXISTS idx_hacktivity_timestamp ON hacktivity(timestamp);
CREATE INDEX IF NOT EXISTS idx_leaderboard_reputation ON leaderboard(reputation);
";

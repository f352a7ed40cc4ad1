/// Page stylesheet. `--sidebar-visible-width` is published by the layout
/// bridge and starts at 0px until the first sync.
pub const SHELL_STYLES: &str = r#"
:root {
    --sidebar-visible-width: 0px;
    --panel-width: 260px;
    --chat-bg: #0f172a;
    --surface-bg: #1e293b;
    --border-color: #334155;
    --accent-bg: #3b82f6;
    --accent-bg-hover: #2563eb;
    --text-primary: #f8fafc;
    --text-secondary: #94a3b8;
    --text-muted: #64748b;
}

html, body {
    margin: 0;
    height: 100%;
    background: var(--chat-bg);
    color: var(--text-primary);
    font-family: system-ui, -apple-system, sans-serif;
}

button {
    font-family: inherit;
    cursor: pointer;
}

.layout-container {
    position: relative;
    height: 100vh;
    overflow: hidden;
}

/* Side panel */
.sidebar {
    position: absolute;
    top: 0;
    bottom: 0;
    left: 0;
    width: var(--panel-width);
    display: flex;
    flex-direction: column;
    background: var(--surface-bg);
    border-right: 1px solid var(--border-color);
    transform: translateX(-100%);
    transition: transform 0.25s ease;
    z-index: 20;
}

.sidebar-open {
    transform: translateX(0);
}

.sidebar-floating {
    position: fixed;
    z-index: 40;
    box-shadow: 4px 0 24px rgba(0, 0, 0, 0.4);
}

.mobile-overlay {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.5);
    z-index: 30;
}

.sidebar-top,
.sidebar-bottom {
    display: flex;
    gap: 0.5rem;
    padding: 0.75rem;
}

.sidebar-bottom {
    flex-direction: column;
    border-top: 1px solid var(--border-color);
}

.new-chat-button {
    flex: 1;
    display: flex;
    gap: 0.5rem;
    align-items: center;
    padding: 0.6rem 0.75rem;
    border: 1px solid var(--border-color);
    border-radius: 0.5rem;
    background: transparent;
    color: var(--text-primary);
}

.sidebar-close,
.sidebar-link,
.chat-history-item {
    border: none;
    background: transparent;
    color: var(--text-secondary);
    text-align: left;
    padding: 0.5rem 0.75rem;
    border-radius: 0.375rem;
}

.sidebar-link:hover,
.chat-history-item:hover,
.new-chat-button:hover {
    background: rgba(148, 163, 184, 0.12);
}

.chat-history-container {
    flex: 1;
    overflow-y: auto;
    padding: 0 0.75rem;
}

.chat-history-empty {
    padding: 1rem 0.75rem;
    font-size: 0.8125rem;
    color: var(--text-muted);
}

.chat-history-group {
    display: flex;
    flex-direction: column;
    margin-bottom: 1rem;
}

.chat-date-header {
    padding: 0.25rem 0.75rem;
    font-size: 0.75rem;
    font-weight: 600;
    color: var(--text-muted);
}

.chat-history-item {
    white-space: nowrap;
    overflow: hidden;
    text-overflow: ellipsis;
    font-size: 0.875rem;
}

/* Content area follows the reserved panel width */
.content-container {
    position: absolute;
    top: 0;
    bottom: 0;
    left: var(--sidebar-visible-width);
    width: calc(100% - var(--sidebar-visible-width));
    display: flex;
    flex-direction: column;
    transition: left 0.25s ease, width 0.25s ease;
}

.chat-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.75rem 1rem;
    border-bottom: 1px solid var(--border-color);
    flex-shrink: 0;
}

.header-left {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}

.header-title {
    margin: 0;
    font-size: 1rem;
    font-weight: 600;
}

.menu-toggle,
.login-button {
    border: 1px solid var(--border-color);
    border-radius: 0.5rem;
    background: transparent;
    color: var(--text-primary);
    padding: 0.35rem 0.7rem;
}

.profile-button {
    width: 2rem;
    height: 2rem;
    border: none;
    border-radius: 50%;
    background: var(--accent-bg);
    color: white;
    font-weight: 600;
}

.main-content {
    flex: 1;
    min-height: 0;
}

.chat-column {
    height: 100%;
    display: flex;
    flex-direction: column;
}

.messages-scroll-area {
    flex: 1;
    overflow-y: auto;
    padding: 1rem 1rem 8rem;
}

.messages-list {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    max-width: 48rem;
    margin: 0 auto;
}

.empty-state {
    display: flex;
    flex-direction: column;
    align-items: center;
    padding: 4rem 1rem;
    text-align: center;
}

.empty-icon {
    font-size: 2.5rem;
    opacity: 0.6;
}

.empty-state p {
    margin: 0.75rem 0 0.25rem;
    font-size: 1.125rem;
    color: var(--text-secondary);
}

.empty-blurb {
    margin-bottom: 1.5rem;
    font-size: 0.875rem;
    color: var(--text-muted);
}

.suggestions {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
    gap: 0.5rem;
    width: 100%;
    max-width: 40rem;
}

.suggestion {
    padding: 0.75rem 1rem;
    border: 1px solid var(--border-color);
    border-radius: 0.75rem;
    background: var(--surface-bg);
    color: var(--text-secondary);
    text-align: left;
}

/* Messages */
.message-row {
    display: flex;
    gap: 0.75rem;
}

.user-row {
    flex-direction: row-reverse;
}

.avatar {
    width: 2rem;
    height: 2rem;
    flex-shrink: 0;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 0.7rem;
    font-weight: 600;
}

.user-avatar {
    background: var(--accent-bg);
    color: white;
}

.assistant-avatar {
    background: var(--surface-bg);
    border: 1px solid var(--border-color);
    color: var(--text-secondary);
}

.message-content {
    display: flex;
    flex-direction: column;
    gap: 0.25rem;
    max-width: calc(100% - 3rem);
}

.user-row .message-content {
    align-items: flex-end;
}

.sender-name {
    font-size: 0.75rem;
    color: var(--text-secondary);
}

.message-bubble {
    padding: 0.75rem 1rem;
    border-radius: 1rem;
    line-height: 1.5;
    white-space: pre-wrap;
    overflow-wrap: anywhere;
}

.user-bubble {
    background: var(--accent-bg);
    color: white;
    border-bottom-right-radius: 0.25rem;
}

.assistant-bubble {
    background: var(--surface-bg);
    border: 1px solid var(--border-color);
    border-bottom-left-radius: 0.25rem;
}

.typing-indicator {
    display: flex;
    gap: 0.25rem;
    padding: 1rem;
    border-radius: 1rem;
    background: var(--surface-bg);
    border: 1px solid var(--border-color);
}

.typing-indicator span {
    width: 0.5rem;
    height: 0.5rem;
    border-radius: 50%;
    background: var(--text-muted);
    animation: typing-bounce 1.4s infinite ease-in-out both;
}

.typing-indicator span:nth-child(1) { animation-delay: -0.32s; }
.typing-indicator span:nth-child(2) { animation-delay: -0.16s; }

@keyframes typing-bounce {
    0%, 80%, 100% { transform: scale(0); }
    40% { transform: scale(1); }
}

/* Input bar: offset comes from the layout context inline style */
.chat-input-area {
    position: fixed;
    left: 0;
    bottom: 0;
    box-sizing: border-box;
    padding: 0.75rem 1rem;
    background: var(--chat-bg);
    border-top: 1px solid var(--border-color);
    transition: transform 0.25s ease, width 0.25s ease;
    z-index: 10;
}

.input-wrapper {
    display: flex;
    gap: 0.5rem;
    align-items: flex-end;
    max-width: 48rem;
    margin: 0 auto;
}

.chat-textarea {
    flex: 1;
    box-sizing: border-box;
    padding: 0.75rem 1rem;
    line-height: 24px;
    max-height: 200px;
    border: 1px solid var(--border-color);
    border-radius: 1.25rem;
    background: var(--surface-bg);
    color: var(--text-primary);
    font-size: 0.9375rem;
    font-family: inherit;
    resize: none;
    outline: none;
}

.chat-textarea:focus {
    border-color: var(--accent-bg);
}

.send-button {
    width: 2.75rem;
    height: 2.75rem;
    flex-shrink: 0;
    border: none;
    border-radius: 50%;
    background: var(--accent-bg);
    color: white;
    font-size: 1.2rem;
}

.send-button:hover:not(:disabled) {
    background: var(--accent-bg-hover);
}

.send-button:disabled {
    background: var(--border-color);
    color: var(--text-muted);
    cursor: not-allowed;
}

.send-button .spinner {
    display: inline-block;
    animation: spin 1s linear infinite;
}

@keyframes spin {
    from { transform: rotate(0deg); }
    to { transform: rotate(360deg); }
}

.input-hint {
    margin-top: 0.4rem;
    text-align: center;
    font-size: 0.75rem;
    color: var(--text-muted);
}
"#;
